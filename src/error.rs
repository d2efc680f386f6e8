use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error returned by every API handler, rendered as `{"detail": "..."}`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] foodgram_shared::Error),

    #[error("Учетные данные не были предоставлены.")]
    Unauthorized,

    #[error("Недопустимый токен.")]
    InvalidToken,

    #[error("{0}")]
    BadRequest(String),

    #[error("Страница не найдена.")]
    NotFound,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(foodgram_shared::Error::Validate(_))
            | AppError::Domain(foodgram_shared::Error::User(_))
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(foodgram_shared::Error::NotFound(_)) | AppError::NotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Domain(foodgram_shared::Error::Forbidden) => StatusCode::FORBIDDEN,
            AppError::Unauthorized | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Domain(foodgram_shared::Error::Server(_))
            | AppError::Domain(foodgram_shared::Error::Unknown(_))
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match &self {
            AppError::Domain(foodgram_shared::Error::NotFound(_)) => "Страница не найдена.".to_owned(),
            AppError::Domain(foodgram_shared::Error::Forbidden) => {
                "У вас недостаточно прав для выполнения данного действия.".to_owned()
            }
            _ if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(error = ?self, "request failed");
                "Internal server error".to_owned()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::from(foodgram_shared::Error::User("x".to_owned())), 400),
            (AppError::from(foodgram_shared::Error::NotFound("recipe".to_owned())), 404),
            (AppError::from(foodgram_shared::Error::Forbidden), 403),
            (AppError::from(foodgram_shared::Error::Server("x".to_owned())), 500),
            (AppError::Unauthorized, 401),
            (AppError::InvalidToken, 401),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status().as_u16(), status);
        }
    }

    #[test]
    fn test_user_error_detail() {
        let error = AppError::from(foodgram_shared::Error::User("Список покупок пуст".to_owned()));
        assert_eq!(error.to_string(), "Список покупок пуст");
    }
}
