//! Read-side product queries.

use crate::product::{
    domain::{Product, ProductSearch},
    ports::{ProductRepository, ProductRepositoryError},
};
use crate::response::{ClientFacingError, INTERNAL_ERROR_MESSAGE, MessageResponse, ResponseStatus};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Envelope message returned when no product is active.
pub const NO_ACTIVE_RECORD_MESSAGE: &str = "No active record found";

/// Service-level errors for product queries.
#[derive(Debug, Error)]
pub enum ProductQueryError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProductRepositoryError),
    /// The product list could not be serialised into an envelope.
    #[error("failed to serialise product list: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientFacingError for ProductQueryError {
    fn status(&self) -> ResponseStatus {
        ResponseStatus::InternalServerError
    }

    fn client_message(&self) -> String {
        INTERNAL_ERROR_MESSAGE.to_owned()
    }
}

/// Result type for product query operations.
pub type ProductQueryResult<T> = Result<T, ProductQueryError>;

/// Product listing and search service.
#[derive(Clone)]
pub struct ProductQueryService<P>
where
    P: ProductRepository,
{
    repository: Arc<P>,
}

impl<P> ProductQueryService<P>
where
    P: ProductRepository,
{
    /// Creates a new product query service.
    #[must_use]
    pub const fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Lists active products inside an envelope.
    ///
    /// An empty listing yields [`NO_ACTIVE_RECORD_MESSAGE`]; otherwise the
    /// message is the JSON serialisation of the full list.
    ///
    /// # Errors
    ///
    /// Returns [`ProductQueryError`] when the lookup or serialisation fails.
    pub async fn list_active_products(&self) -> ProductQueryResult<MessageResponse> {
        let products = self.repository.list_active().await?;
        debug!(count = products.len(), "listed active products");
        if products.is_empty() {
            return Ok(MessageResponse::new(NO_ACTIVE_RECORD_MESSAGE));
        }
        Ok(MessageResponse::serialized(&products)?)
    }

    /// Searches products, returning the repository's result unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ProductQueryError::Repository`] when the search fails.
    pub async fn search(&self, criteria: &ProductSearch) -> ProductQueryResult<Vec<Product>> {
        let products = self.repository.search(criteria).await?;
        debug!(count = products.len(), "product search completed");
        Ok(products)
    }
}
