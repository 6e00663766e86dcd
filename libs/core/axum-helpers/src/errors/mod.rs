pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every endpoint.
///
/// The API has always answered failures with a single `error` string, so the
/// body stays that small:
///
/// ```json
/// { "error": "Produto não encontrado" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this type so that logging
/// and the response body format live in one place.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
        };

        error_response(status, message)
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::error_response;
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::BAD_REQUEST, "Dados inválidos".to_string());
/// ```
pub fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
