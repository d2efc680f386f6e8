use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use foodgram_user::{LoginInput, RegisterInput, SetPasswordInput, SubscriptionView, UserView};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::{
    error::{AppError, AppResult},
    middleware::Auth,
};

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> AppResult<impl IntoResponse> {
    let user_id = state.user_command.login(input).await?;
    let lifetime = state.config.jwt.expiration_days.max(1) as u64 * 24 * 60 * 60;
    let token = crate::auth::generate_token(user_id, &state.config.jwt.secret, lifetime)?;

    let cookie = Cookie::build(("auth_token", token.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Json(json!({ "auth_token": token }))))
}

pub async fn logout(_auth: Auth, jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(Cookie::build("auth_token").path("/")),
        StatusCode::NO_CONTENT,
    )
}

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.user_command.register(input).await?;
    let user = state.user_query.find(id, None).await?.ok_or(AppError::NotFound)?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list(
    State(state): State<AppState>,
    auth: Option<Auth>,
) -> AppResult<Json<Vec<UserView>>> {
    let viewer = auth.as_ref().map(|a| a.user_id.as_str());

    Ok(Json(state.user_query.list(viewer).await?))
}

pub async fn detail(
    State(state): State<AppState>,
    auth: Option<Auth>,
    Path(id): Path<String>,
) -> AppResult<Json<UserView>> {
    let viewer = auth.as_ref().map(|a| a.user_id.as_str());
    let user = state.user_query.find(id, viewer).await?.ok_or(AppError::NotFound)?;

    Ok(Json(user))
}

pub async fn me(State(state): State<AppState>, auth: Auth) -> AppResult<Json<UserView>> {
    let user = state
        .user_query
        .find(&auth.user_id, Some(auth.user_id.as_str()))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(user))
}

pub async fn set_password(
    State(state): State<AppState>,
    auth: Auth,
    Json(input): Json<SetPasswordInput>,
) -> AppResult<StatusCode> {
    state.user_command.set_password(auth.user_id, input).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct SubscriptionParams {
    pub recipes_limit: Option<u32>,
}

pub async fn subscriptions(
    State(state): State<AppState>,
    auth: Auth,
    Query(params): Query<SubscriptionParams>,
) -> AppResult<Json<Vec<SubscriptionView>>> {
    Ok(Json(
        state
            .user_query
            .subscriptions(auth.user_id, params.recipes_limit)
            .await?,
    ))
}

pub async fn subscribe(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
    Query(params): Query<SubscriptionParams>,
) -> AppResult<impl IntoResponse> {
    state
        .user_command
        .subscription
        .subscribe(&id, &auth.user_id)
        .await?;

    let view = state
        .user_query
        .subscriptions(&auth.user_id, params.recipes_limit)
        .await?
        .into_iter()
        .find(|s| s.author.id == id)
        .ok_or(AppError::NotFound)?;

    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn unsubscribe(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .user_command
        .subscription
        .unsubscribe(id, auth.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
