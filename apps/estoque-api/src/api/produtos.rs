//! Produtos API routes

use axum::Router;
use domain_products::{handlers, ProductService};

use crate::state::AppState;

/// Create produtos router over the shared in-memory store
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.repository.clone());
    handlers::router(service)
}
