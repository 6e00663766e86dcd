use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, UpdateProduct};

/// Ordered product collection plus the id counter.
///
/// Invariants: ids are pairwise distinct, and `next_id` is strictly greater
/// than every id ever issued, so deleted ids are never handed out again.
/// Listing follows insertion order.
#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: u64,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Assigns the next id and appends. Never fails; `input` is already valid.
    pub fn insert(&mut self, input: NewProduct) -> Product {
        let product = Product::new(self.next_id, input);
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    /// Overwrites the fields present in `patch`. `None` if `id` is unknown.
    pub fn update(&mut self, id: u64, patch: UpdateProduct) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.apply_update(patch);
        Some(product.clone())
    }

    /// Returns whether a product was removed.
    pub fn delete_by_id(&mut self, id: u64) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.products.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Id the next insert will receive.
    #[cfg(test)]
    fn next_id(&self) -> u64 {
        self.next_id
    }
}

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Insert one validated product
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Insert a batch in order, atomically with respect to other operations
    async fn create_many(&self, inputs: Vec<NewProduct>) -> ProductResult<Vec<Product>>;

    /// Update an existing product
    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: u64) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository.
///
/// One lock guards the whole store: every write holds it for its entire
/// effect, so mutations never interleave with each other or with reads.
/// Clones share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<ProductStore>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(ProductStore::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.list().to_vec())
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.get_by_id(id).cloned())
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store.insert(input);

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn create_many(&self, inputs: Vec<NewProduct>) -> ProductResult<Vec<Product>> {
        let mut store = self.store.write().await;
        let created: Vec<Product> = inputs.into_iter().map(|input| store.insert(input)).collect();

        if let (Some(first), Some(last)) = (created.first(), created.last()) {
            tracing::info!(
                count = created.len(),
                first_id = first.id,
                last_id = last.id,
                "Created products in bulk"
            );
        }
        Ok(created)
    }

    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let updated = store.update(id, input).ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.delete_by_id(id) {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            quantity: 0,
            price: 0.0,
        }
    }

    #[test]
    fn test_store_starts_empty_with_counter_at_one() {
        let store = ProductStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let mut store = ProductStore::new();
        let a = store.insert(new_product("A"));
        let b = store.insert(new_product("B"));
        assert!(store.delete_by_id(b.id));

        let c = store.insert(new_product("C"));
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut store = ProductStore::new();
        for name in ["C", "A", "B"] {
            store.insert(new_product(name));
        }
        let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let mut store = ProductStore::new();
        assert!(store.update(9, UpdateProduct::default()).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_false() {
        let mut store = ProductStore::new();
        store.insert(new_product("A"));
        assert!(!store.delete_by_id(2));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(new_product("Widget")).await.unwrap();
        assert_eq!(product.id, 1);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_create_many_assigns_consecutive_ids() {
        let repo = InMemoryProductRepository::new();
        repo.create(new_product("first")).await.unwrap();

        let created = repo
            .create_many(vec![new_product("A"), new_product("B")])
            .await
            .unwrap();
        let ids: Vec<u64> = created.iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.update(1, UpdateProduct::default()).await;
        assert!(matches!(result, Err(ProductError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_clones_share_the_same_store() {
        let repo = InMemoryProductRepository::new();
        let clone = repo.clone();
        clone.create(new_product("A")).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = InMemoryProductRepository::new();

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_product(&format!("p{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&50));
    }
}
