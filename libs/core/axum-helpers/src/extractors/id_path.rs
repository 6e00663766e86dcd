//! Integer id path parameter extractor.

use crate::errors::{messages, AppError};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for non-negative integer ids in the path.
///
/// A segment that is not a non-negative integer (`abc`, `-1`, `1.5`) is
/// treated as a route that does not exist and answered with the generic 404
/// body, not a 400.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub u64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<u64>().map(IdPath).map_err(|_| {
            tracing::debug!(segment = %raw, "Path id is not a non-negative integer");
            AppError::NotFound(messages::NOT_FOUND_RESOURCE.to_string()).into_response()
        })
    }
}
