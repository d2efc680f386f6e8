use axum::{
    Json,
    extract::{Path, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
};
use foodgram_shopping::ShoppingListExport;

use super::AppState;
use crate::{error::AppResult, middleware::Auth};

pub async fn add(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let recipe = state.shopping_command.add(id, auth.user_id).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn remove(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.shopping_command.remove(id, auth.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/recipes/download_shopping_cart
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    auth: Auth,
) -> AppResult<impl IntoResponse> {
    let export = state.shopping_query.export(auth.user_id).await?;

    Ok((
        [
            (CONTENT_TYPE, ShoppingListExport::CONTENT_TYPE.to_owned()),
            (CONTENT_DISPOSITION, export.content_disposition()),
        ],
        export.content,
    ))
}
