use axum::{
    Json,
    extract::{Path, Query, State},
};
use foodgram_recipe::IngredientView;
use serde::Deserialize;

use super::AppState;
use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
pub struct IngredientParams {
    pub name: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IngredientParams>,
) -> AppResult<Json<Vec<IngredientView>>> {
    Ok(Json(
        state
            .recipe_query
            .ingredients(params.name.as_deref())
            .await?,
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<IngredientView>> {
    let ingredient = state
        .recipe_query
        .find_ingredient(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(ingredient))
}
