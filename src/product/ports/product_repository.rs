//! Repository port for product persistence, lookup and search.

use crate::product::domain::{NewProduct, Product, ProductId, ProductSearch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for product repository operations.
pub type ProductRepositoryResult<T> = Result<T, ProductRepositoryError>;

/// Product persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product and returns it with its assigned identifier.
    async fn insert(&self, product: NewProduct) -> ProductRepositoryResult<Product>;

    /// Persists changes to an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::NotFound`] when the product does not
    /// exist.
    async fn update(&self, product: &Product) -> ProductRepositoryResult<()>;

    /// Finds a product by identifier.
    ///
    /// Returns `None` when the product does not exist.
    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>>;

    /// Returns every product whose status marks it active.
    async fn list_active(&self) -> ProductRepositoryResult<Vec<Product>>;

    /// Returns products matching `criteria`, ordered by identifier.
    async fn search(&self, criteria: &ProductSearch) -> ProductRepositoryResult<Vec<Product>>;
}

/// Errors returned by product repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProductRepositoryError {
    /// The product was not found.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProductRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
