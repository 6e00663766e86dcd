//! API routes module

pub mod produtos;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest(domain_products::URL, produtos::router(state))
}
