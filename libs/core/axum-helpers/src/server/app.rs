use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::{Json, Router, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind to the configured
/// address or the server fails while running.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     create_app(Router::new(), &ServerConfig::default()).await
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps the API routes with the cross-cutting pieces every app gets:
///
/// - the OpenAPI document of `T` at [`OPENAPI_JSON_PATH`]
/// - a JSON 404 fallback for unknown routes
/// - request tracing through `tower-http`
///
/// Routes are merged at the root, not nested under a prefix. Domain routers
/// apply their own state before being passed in.
///
/// # Example
/// ```ignore
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths())]
/// struct ApiDoc;
///
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .route(OPENAPI_JSON_PATH, get(|| async { Json(T::openapi()) }))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
