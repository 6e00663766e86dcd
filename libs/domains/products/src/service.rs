//! Product Service - Business logic layer

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    apply_defaults, BulkCreateOutcome, BulkCreateReport, BulkItemError, Product, ProductDefaults,
};
use crate::repository::ProductRepository;
use crate::validation::{
    validate_bulk_item, validate_bulk_payload, validate_create_payload, validate_patch,
};

/// Product service providing business logic operations
///
/// Takes raw decoded bodies, validates them, fills defaults and drives the
/// repository. Lookups that miss become [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    defaults: ProductDefaults,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            defaults: self.defaults,
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self::with_defaults(repository, ProductDefaults::default())
    }

    pub fn with_defaults(repository: R, defaults: ProductDefaults) -> Self {
        Self {
            repository: Arc::new(repository),
            defaults,
        }
    }

    /// All products in insertion order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a single product from a raw body
    #[instrument(skip(self, raw))]
    pub async fn create_product(&self, raw: Option<&Value>) -> ProductResult<Product> {
        let input = validate_create_payload(raw)?;
        self.repository
            .create(apply_defaults(input, &self.defaults))
            .await
    }

    /// Create several products from a raw array body.
    ///
    /// Every item is validated first; the accepted ones are then inserted in
    /// submission order in one repository call, so their ids are consecutive.
    /// Rejected items never consume an id.
    #[instrument(skip(self, raw))]
    pub async fn bulk_create(&self, raw: Option<&Value>) -> ProductResult<BulkCreateOutcome> {
        let items = validate_bulk_payload(raw)?;

        let mut accepted = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for item in items {
            match validate_bulk_item(item) {
                Ok(input) => accepted.push(apply_defaults(input, &self.defaults)),
                Err(e) => errors.push(BulkItemError {
                    error: e.to_string(),
                    item: item.clone(),
                }),
            }
        }

        let created = if accepted.is_empty() {
            Vec::new()
        } else {
            self.repository.create_many(accepted).await?
        };

        if errors.is_empty() {
            Ok(BulkCreateOutcome::Created(created))
        } else {
            tracing::info!(
                added = created.len(),
                rejected = errors.len(),
                "Bulk create partially rejected"
            );
            Ok(BulkCreateOutcome::Partial(BulkCreateReport::new(
                created, errors,
            )))
        }
    }

    /// Update an existing product.
    ///
    /// The body is checked before the id, so a bad body on an unknown id
    /// is a validation error.
    #[instrument(skip(self, raw))]
    pub async fn update_product(&self, id: u64, raw: Option<&Value>) -> ProductResult<Product> {
        let patch = validate_patch(raw)?;
        self.repository.update(id, patch).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::{NewProduct, UpdateProduct};
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use serde_json::json;

    fn stored(id: u64, input: NewProduct) -> Product {
        Product::new(id, input)
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(3))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(3).await;

        assert!(matches!(result, Err(ProductError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_create_fills_defaults_before_insert() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .with(eq(NewProduct {
                name: "Caneta".to_string(),
                quantity: 0,
                price: 0.0,
            }))
            .times(1)
            .returning(|input| Ok(stored(1, input)));

        let service = ProductService::new(mock_repo);
        let product = service
            .create_product(Some(&json!({ "nome": "Caneta" })))
            .await
            .unwrap();

        assert_eq!(product.quantity, 0);
        assert_eq!(product.price, 0.0);
    }

    #[tokio::test]
    async fn test_create_uses_configured_defaults() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(stored(1, input)));

        let defaults = ProductDefaults {
            quantity: 1,
            price: 5.0,
        };
        let service = ProductService::with_defaults(mock_repo, defaults);
        let product = service
            .create_product(Some(&json!({ "nome": "Lápis", "preco": 2.0 })))
            .await
            .unwrap();

        assert_eq!(product.quantity, 1);
        assert_eq!(product.price, 2.0);
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service.create_product(Some(&json!({ "nome": "" }))).await;

        assert!(matches!(
            result,
            Err(ProductError::Validation(ValidationError::InvalidName))
        ));
    }

    #[tokio::test]
    async fn test_bulk_all_valid_is_created() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create_many()
            .times(1)
            .returning(|inputs| {
                Ok(inputs
                    .into_iter()
                    .zip(1..)
                    .map(|(input, id)| stored(id, input))
                    .collect())
            });

        let service = ProductService::new(mock_repo);
        let outcome = service
            .bulk_create(Some(&json!([{ "nome": "A" }, { "nome": "B", "quantidade": 2 }])))
            .await
            .unwrap();

        match outcome {
            BulkCreateOutcome::Created(products) => {
                assert_eq!(products.len(), 2);
                assert_eq!(products[1].quantity, 2);
            }
            other => panic!("expected Created, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bulk_mixed_reports_rejected_items() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create_many()
            .withf(|inputs| inputs.len() == 1 && inputs[0].name == "A")
            .returning(|inputs| {
                Ok(inputs
                    .into_iter()
                    .map(|input| stored(7, input))
                    .collect())
            });

        let service = ProductService::new(mock_repo);
        let outcome = service
            .bulk_create(Some(&json!([{ "nome": "A" }, { "nome": "" }, 5])))
            .await
            .unwrap();

        let BulkCreateOutcome::Partial(report) = outcome else {
            panic!("expected Partial");
        };
        assert_eq!(report.message, "1 produtos adicionados com sucesso.");
        assert_eq!(report.added_products[0].id, 7);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].item, json!({ "nome": "" }));
        assert_eq!(
            report.errors[1].error,
            ValidationError::ItemNotAnObject.to_string()
        );
    }

    #[tokio::test]
    async fn test_bulk_all_invalid_skips_insert() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create_many().never();

        let service = ProductService::new(mock_repo);
        let outcome = service.bulk_create(Some(&json!([{}]))).await.unwrap();

        let BulkCreateOutcome::Partial(report) = outcome else {
            panic!("expected Partial");
        };
        assert!(report.added_products.is_empty());
        assert_eq!(report.message, "0 produtos adicionados com sucesso.");
    }

    #[tokio::test]
    async fn test_bulk_empty_array_is_created_without_insert() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create_many().never();

        let service = ProductService::new(mock_repo);
        let outcome = service.bulk_create(Some(&json!([]))).await.unwrap();

        assert_eq!(outcome, BulkCreateOutcome::Created(Vec::new()));
    }

    #[tokio::test]
    async fn test_update_validates_body_before_lookup() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service.update_product(99, None).await;

        assert!(matches!(
            result,
            Err(ProductError::Validation(ValidationError::MissingBody))
        ));
    }

    #[tokio::test]
    async fn test_update_passes_patch_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .with(
                eq(2),
                eq(UpdateProduct {
                    quantity: Some(9),
                    ..Default::default()
                }),
            )
            .returning(|id, _| Err(ProductError::NotFound(id)));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(2, Some(&json!({ "quantidade": 9 })))
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(2))));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(4)).returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(4).await;

        assert!(matches!(result, Err(ProductError::NotFound(4))));
    }
}
