//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI document, JSON fallback and request tracing
//! - Liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
