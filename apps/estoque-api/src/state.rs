//! Application state management

use domain_products::InMemoryProductRepository;

/// Shared application state
///
/// Cloning is cheap; clones of the repository share the same store.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: InMemoryProductRepository,
}
