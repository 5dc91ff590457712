//! Repository port for the approval queue.

use crate::product::domain::{ApprovalEntry, NewApprovalEntry};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for approval queue operations.
pub type ApprovalQueueResult<T> = Result<T, ApprovalQueueError>;

/// Approval queue persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApprovalQueueRepository: Send + Sync {
    /// Stores a new entry and returns it with its assigned identifier.
    async fn save(&self, entry: NewApprovalEntry) -> ApprovalQueueResult<ApprovalEntry>;

    /// Returns every entry ordered by requested date, oldest first.
    async fn list_by_date(&self) -> ApprovalQueueResult<Vec<ApprovalEntry>>;
}

/// Errors returned by approval queue implementations.
#[derive(Debug, Clone, Error)]
pub enum ApprovalQueueError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApprovalQueueError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
