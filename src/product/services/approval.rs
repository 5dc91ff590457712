//! Soft-delete workflow routing product deletions through the approval queue.
//!
//! [`ApprovalWorkflowService::request_deletion`] never removes a product: it
//! records a pending-deletion entry that a separate approval process
//! resolves. Requests are not deduplicated, so repeated calls for the same
//! product queue one entry each.

use crate::product::{
    domain::{ApprovalEntry, NewApprovalEntry, ProductId},
    ports::{
        ApprovalQueueError, ApprovalQueueRepository, ProductRepository, ProductRepositoryError,
    },
};
use crate::response::{ClientFacingError, INTERNAL_ERROR_MESSAGE, MessageResponse, ResponseStatus};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Envelope message returned once a deletion has been queued.
pub const DELETION_QUEUED_MESSAGE: &str = "Product deletion sent for approval.";

/// Envelope message returned when the product to delete does not exist.
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "No Product Found with given id.";

/// Service-level errors for the approval workflow.
#[derive(Debug, Error)]
pub enum ApprovalWorkflowError {
    /// No product has the requested identifier.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
    /// Product lookup failed.
    #[error(transparent)]
    Products(#[from] ProductRepositoryError),
    /// Approval queue operation failed.
    #[error(transparent)]
    Queue(#[from] ApprovalQueueError),
    /// The queue listing could not be serialised into an envelope.
    #[error("failed to serialise approval queue: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientFacingError for ApprovalWorkflowError {
    fn status(&self) -> ResponseStatus {
        match self {
            Self::ProductNotFound(_) => ResponseStatus::BadRequest,
            Self::Products(_) | Self::Queue(_) | Self::Serialization(_) => {
                ResponseStatus::InternalServerError
            }
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::ProductNotFound(_) => PRODUCT_NOT_FOUND_MESSAGE.to_owned(),
            Self::Products(_) | Self::Queue(_) | Self::Serialization(_) => {
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        }
    }
}

/// Result type for approval workflow operations.
pub type ApprovalWorkflowResult<T> = Result<T, ApprovalWorkflowError>;

/// Approval-queue orchestration service.
#[derive(Clone)]
pub struct ApprovalWorkflowService<P, Q, C>
where
    P: ProductRepository,
    Q: ApprovalQueueRepository,
    C: Clock + Send + Sync,
{
    products: Arc<P>,
    queue: Arc<Q>,
    clock: Arc<C>,
}

impl<P, Q, C> ApprovalWorkflowService<P, Q, C>
where
    P: ProductRepository,
    Q: ApprovalQueueRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new approval workflow service.
    #[must_use]
    pub const fn new(products: Arc<P>, queue: Arc<Q>, clock: Arc<C>) -> Self {
        Self {
            products,
            queue,
            clock,
        }
    }

    /// Queues a pending-deletion entry for an existing product.
    ///
    /// The product record is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalWorkflowError::ProductNotFound`] when the product
    /// does not exist, in which case nothing is queued, or a repository
    /// error when persistence fails.
    pub async fn queue_deletion(
        &self,
        product_id: ProductId,
    ) -> ApprovalWorkflowResult<ApprovalEntry> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(ApprovalWorkflowError::ProductNotFound(product_id))?;

        let entry = self
            .queue
            .save(NewApprovalEntry::pending_deletion(&product, &*self.clock))
            .await?;
        info!(
            product_id = %product_id,
            approval_id = %entry.id(),
            "product deletion queued for approval"
        );
        Ok(entry)
    }

    /// Requests deletion of a product and returns the confirmation envelope.
    ///
    /// # Errors
    ///
    /// See [`Self::queue_deletion`].
    pub async fn request_deletion(
        &self,
        product_id: ProductId,
    ) -> ApprovalWorkflowResult<MessageResponse> {
        self.queue_deletion(product_id).await?;
        Ok(MessageResponse::new(DELETION_QUEUED_MESSAGE))
    }

    /// Returns the approval queue, ordered by requested date, serialised
    /// into an envelope.
    ///
    /// An empty queue yields the message `[]`.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalWorkflowError::Queue`] when the listing fails.
    pub async fn list_approval_queue(&self) -> ApprovalWorkflowResult<MessageResponse> {
        let entries = self.queue.list_by_date().await?;
        debug!(count = entries.len(), "listed approval queue");
        Ok(MessageResponse::serialized(&entries)?)
    }
}
