//! # Axum Helpers
//!
//! Shared plumbing for the Axum applications in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup, health endpoint, graceful shutdown
//! - **[`errors`]**: `AppError` and the `{ "error": ... }` response body
//! - **[`extractors`]**: Integer id path parameter, lenient JSON body
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use server::{create_app, create_router, health_router, shutdown_signal};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, LenientJson};
