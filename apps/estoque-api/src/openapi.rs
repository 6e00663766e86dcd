//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Estoque API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Estoque API",
        version = "0.1.0",
        description = "In-memory product inventory API"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/produtos", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
