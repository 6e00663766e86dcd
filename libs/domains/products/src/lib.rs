//! Products Domain
//!
//! In-memory product inventory exposed over HTTP under [`URL`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, defaults, bulk policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService, URL};
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! let app: Router = Router::new().nest(URL, handlers::router(service));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult, ValidationError};
pub use handlers::{ApiDoc, URL};
pub use models::{
    BulkCreateOutcome, BulkCreateReport, BulkItemError, CreateProduct, MessageResponse,
    NewProduct, Product, ProductDefaults, ProductInput, UpdateProduct,
};
pub use repository::{InMemoryProductRepository, ProductRepository, ProductStore};
pub use service::ProductService;
