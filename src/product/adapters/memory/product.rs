//! In-memory product repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::product::{
    domain::{NewProduct, Product, ProductId, ProductSearch},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};

/// Thread-safe in-memory product repository.
///
/// Identifiers are assigned sequentially from 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryProductState>>,
}

#[derive(Debug, Default)]
struct InMemoryProductState {
    products: BTreeMap<ProductId, Product>,
    last_id: i64,
}

impl InMemoryProductRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ProductRepositoryError {
    ProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> ProductRepositoryResult<Product> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id = state.last_id.saturating_add(1);
        let stored = product.into_persisted(ProductId::new(state.last_id));
        state.products.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> ProductRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .products
            .get_mut(&product.id())
            .ok_or(ProductRepositoryError::NotFound(product.id()))?;
        *slot = product.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.products.get(&id).cloned())
    }

    async fn list_active(&self) -> ProductRepositoryResult<Vec<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .products
            .values()
            .filter(|product| product.is_active())
            .cloned()
            .collect())
    }

    async fn search(&self, criteria: &ProductSearch) -> ProductRepositoryResult<Vec<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .products
            .values()
            .filter(|product| criteria.matches(product))
            .cloned()
            .collect())
    }
}
