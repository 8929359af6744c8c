use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        match value {
            backend_application::AppError::Unauthorized => HttpError::Unauthorized,
            backend_application::AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            backend_application::AppError::NotFound(msg) => HttpError::NotFound(msg),
            backend_application::AppError::Conflict(msg) => HttpError::Conflict(msg),
            backend_application::AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("bad request: {}", msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("not found: {}", msg)),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, format!("conflict: {}", msg)),
            HttpError::Internal(msg) => {
                error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
