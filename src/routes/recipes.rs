use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::Query;
use foodgram_recipe::{RecipeFilter, RecipeInput, RecipeView};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::{
    error::{AppError, AppResult},
    middleware::Auth,
};

#[derive(Deserialize, Default)]
pub struct RecipeParams {
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub is_favorited: Option<u8>,
    pub is_in_shopping_cart: Option<u8>,
}

impl From<RecipeParams> for RecipeFilter {
    fn from(params: RecipeParams) -> Self {
        Self {
            tags: params.tags,
            author: params.author,
            is_favorited: params.is_favorited == Some(1),
            is_in_shopping_cart: params.is_in_shopping_cart == Some(1),
        }
    }
}

async fn view(state: &AppState, id: String, viewer: Option<&str>) -> AppResult<RecipeView> {
    state
        .recipe_query
        .find(id, viewer)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn list(
    State(state): State<AppState>,
    auth: Option<Auth>,
    Query(params): Query<RecipeParams>,
) -> AppResult<Json<Vec<RecipeView>>> {
    let viewer = auth.as_ref().map(|a| a.user_id.as_str());

    Ok(Json(state.recipe_query.filter(params.into(), viewer).await?))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.recipe_command.create(&auth.user_id, input).await?;
    let recipe = view(&state, id, Some(auth.user_id.as_str())).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn detail(
    State(state): State<AppState>,
    auth: Option<Auth>,
    Path(id): Path<String>,
) -> AppResult<Json<RecipeView>> {
    let viewer = auth.as_ref().map(|a| a.user_id.as_str());

    Ok(Json(view(&state, id, viewer).await?))
}

pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
    Json(input): Json<RecipeInput>,
) -> AppResult<Json<RecipeView>> {
    state
        .recipe_command
        .update(&id, &auth.user_id, input)
        .await?;

    Ok(Json(view(&state, id, Some(auth.user_id.as_str())).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.recipe_command.delete(id, auth.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn favorite(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let recipe = state.recipe_command.favorite.add(id, auth.user_id).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn unfavorite(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.recipe_command.favorite.remove(id, auth.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let recipe = view(&state, id, None).await?;
    let base_url = state.config.site.base_url.trim_end_matches('/');

    Ok(Json(json!({
        "short-link": format!("{base_url}/recipes/{}", recipe.id)
    })))
}
