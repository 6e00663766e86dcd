//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - missing, malformed or invalid body",
    content_type = "application/json",
    example = json!({
        "error": "Dados JSON ausentes ou inválidos"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Produto não encontrado"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
