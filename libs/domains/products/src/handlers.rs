//! HTTP handlers for Products API

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, NotFoundResponse},
    IdPath, LenientJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    BulkCreateOutcome, BulkCreateReport, BulkItemError, MessageResponse, Product, ProductInput,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Mount point of the products router.
pub const URL: &str = "/produtos";

const DELETED_MESSAGE: &str = "Produto deletado";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        bulk_create,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, ProductInput, BulkCreateReport, BulkItemError, MessageResponse
        ),
        responses(NotFoundResponse, BadRequestResponse)
    ),
    tags(
        (name = "Produtos", description = "Product inventory endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/bulk", post(bulk_create))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Produtos",
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<Product>)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Produtos",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    LenientJson(body): LenientJson,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(body.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Create several products at once
///
/// Answers 201 with the created products when every item is valid, and 200
/// with a report listing the rejected items otherwise.
#[utoipa::path(
    post,
    path = "/bulk",
    tag = "Produtos",
    request_body = Vec<ProductInput>,
    responses(
        (status = 201, description = "Every item created", body = Vec<Product>),
        (status = 200, description = "Some items rejected", body = BulkCreateReport),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn bulk_create<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    LenientJson(body): LenientJson,
) -> ProductResult<Response> {
    let response = match service.bulk_create(body.as_ref()).await? {
        BulkCreateOutcome::Created(products) => {
            (StatusCode::CREATED, Json(products)).into_response()
        }
        BulkCreateOutcome::Partial(report) => (StatusCode::OK, Json(report)).into_response(),
    };
    Ok(response)
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Produtos",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Produtos",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    LenientJson(body): LenientJson,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, body.as_ref()).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Produtos",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<MessageResponse>> {
    service.delete_product(id).await?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
