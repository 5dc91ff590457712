//! Product creation and status maintenance.

use super::PRODUCT_NOT_FOUND_MESSAGE;
use crate::product::{
    domain::{NewProduct, Product, ProductDomainError, ProductId, ProductStatus},
    ports::{ProductRepository, ProductRepositoryError},
};
use crate::response::{ClientFacingError, INTERNAL_ERROR_MESSAGE, ResponseStatus};
use mockable::Clock;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductRequest {
    name: String,
    price: Decimal,
    status: String,
}

impl CreateProductRequest {
    /// Creates a request with the `ACTIVE` status.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            status: ProductStatus::ACTIVE.to_owned(),
        }
    }

    /// Sets the initial status tag.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Service-level errors for catalogue maintenance.
#[derive(Debug, Error)]
pub enum ProductCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProductDomainError),
    /// No product has the requested identifier.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProductRepositoryError),
}

impl ClientFacingError for ProductCatalogError {
    fn status(&self) -> ResponseStatus {
        match self {
            Self::Domain(_) | Self::ProductNotFound(_) => ResponseStatus::BadRequest,
            Self::Repository(_) => ResponseStatus::InternalServerError,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::ProductNotFound(_) => PRODUCT_NOT_FOUND_MESSAGE.to_owned(),
            Self::Repository(_) => INTERNAL_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Result type for catalogue maintenance operations.
pub type ProductCatalogResult<T> = Result<T, ProductCatalogError>;

/// Product creation and status service.
#[derive(Clone)]
pub struct ProductCatalogService<P, C>
where
    P: ProductRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<P>,
    clock: Arc<C>,
}

impl<P, C> ProductCatalogService<P, C>
where
    P: ProductRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new catalogue service.
    #[must_use]
    pub const fn new(repository: Arc<P>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductCatalogError::Domain`] when the payload is invalid or
    /// [`ProductCatalogError::Repository`] when persistence fails.
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> ProductCatalogResult<Product> {
        let CreateProductRequest {
            name,
            price,
            status,
        } = request;

        let draft = NewProduct::new(name, price, ProductStatus::new(status)?, &*self.clock)?;
        let product = self.repository.insert(draft).await?;
        info!(product_id = %product.id(), "product created");
        Ok(product)
    }

    /// Replaces a product's status tag.
    ///
    /// # Errors
    ///
    /// Returns [`ProductCatalogError::Domain`] for a blank tag,
    /// [`ProductCatalogError::ProductNotFound`] when the product does not
    /// exist, or [`ProductCatalogError::Repository`] when persistence fails.
    pub async fn update_status(
        &self,
        product_id: ProductId,
        status: impl Into<String> + Send,
    ) -> ProductCatalogResult<Product> {
        let new_status = ProductStatus::new(status)?;
        let mut product = self
            .repository
            .find_by_id(product_id)
            .await?
            .ok_or(ProductCatalogError::ProductNotFound(product_id))?;

        product.set_status(new_status);
        self.repository.update(&product).await?;
        info!(product_id = %product_id, status = %product.status(), "product status updated");
        Ok(product)
    }
}
