use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{error::AppError, routes::AppState};

/// Auth extension containing the user id extracted from the token
#[derive(Clone, Debug)]
pub struct Auth {
    pub user_id: String,
}

fn bearer(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if scheme.eq_ignore_ascii_case("token") || scheme.eq_ignore_ascii_case("bearer") {
        return Some(token.trim().to_owned());
    }

    None
}

/// Resolves the caller from `Authorization: Token <jwt>`, `Bearer <jwt>` or
/// the `auth_token` cookie and inserts the [`Auth`] extension.
///
/// Requests without credentials go through untouched, handlers decide
/// whether they need [`Auth`]. A token that does not validate, or whose
/// user no longer exists, is rejected with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let token = bearer(&parts).or_else(|| jar.get("auth_token").map(|c| c.value().to_owned()));

    let Some(token) = token else {
        return next.run(Request::from_parts(parts, body)).await;
    };

    let user_id = match crate::auth::validate_token(&token, &state.config.jwt.secret) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Invalid JWT token: {e}");
            return AppError::InvalidToken.into_response();
        }
    };

    match state.user_query.find(&user_id, None).await {
        Ok(Some(_)) => {
            parts.extensions.insert(Auth { user_id });
            next.run(Request::from_parts(parts, body)).await
        }
        Ok(None) => {
            tracing::warn!(user_id = %user_id, "token issued for an unknown user");
            AppError::InvalidToken.into_response()
        }
        Err(e) => AppError::Internal(e).into_response(),
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Auth>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

impl<S: Send + Sync> OptionalFromRequestParts<S> for Auth {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<Auth>().cloned())
    }
}
