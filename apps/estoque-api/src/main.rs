//! Estoque API - in-memory product inventory over REST

use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::InMemoryProductRepository;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // One store for the whole process; every route shares it
    let state = AppState {
        config,
        repository: InMemoryProductRepository::new(),
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(state.config.app));

    info!(
        environment = ?state.config.environment,
        "Starting {} v{}",
        state.config.app.name,
        state.config.app.version
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Estoque API shutdown complete");
    Ok(())
}
