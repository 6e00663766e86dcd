use axum::response::{IntoResponse, Response};

use super::{messages, AppError};

/// Handler for 404 Not Found errors.
///
/// Installed as the router fallback by [`crate::server::create_router`].
pub async fn not_found() -> Response {
    AppError::NotFound(messages::NOT_FOUND_RESOURCE.to_string()).into_response()
}
