use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message returned for any unknown product id.
pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado";

/// Reasons a submitted body or bulk item is rejected.
///
/// The `Display` text is what clients see in the `error` field, so the
/// messages are kept exactly as the API has always returned them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Dados JSON ausentes ou inválidos")]
    MissingBody,

    #[error("Requisição deve ser um array de produtos")]
    NotAnArray,

    #[error("Item no array não é um objeto JSON válido")]
    ItemNotAnObject,

    #[error("Campo \"nome\" é obrigatório e deve ser uma string não vazia")]
    InvalidName,

    #[error("Campo \"nome\" é obrigatório e deve ser uma string não vazia para um dos produtos")]
    InvalidItemName,

    /// A field has the wrong JSON type; the message names the field.
    #[error("{0}")]
    InvalidField(String),
}

impl ValidationError {
    pub fn invalid_field(field: &str, expected: &str) -> Self {
        ValidationError::InvalidField(format!("Campo \"{field}\" deve ser {expected}"))
    }
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = id, "Product lookup missed");
                AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
            }
            ProductError::Validation(e) => AppError::BadRequest(e.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ProductError::NotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ProductError::from(ValidationError::InvalidName).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_message_names_the_field() {
        let err = ValidationError::invalid_field("quantidade", "um número inteiro");
        assert_eq!(err.to_string(), "Campo \"quantidade\" deve ser um número inteiro");
    }
}
