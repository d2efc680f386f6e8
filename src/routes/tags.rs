use axum::{
    Json,
    extract::{Path, State},
};
use foodgram_recipe::TagView;

use super::AppState;
use crate::error::{AppError, AppResult};

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TagView>>> {
    Ok(Json(state.recipe_query.tags().await?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TagView>> {
    let tag = state.recipe_query.find_tag(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(tag))
}
