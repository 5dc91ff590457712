//! Repository port for task assignments.

use crate::task::domain::{AssignedTask, NewAssignedTask, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment repository operations.
pub type AssignmentRepositoryResult<T> = Result<T, AssignmentRepositoryError>;

/// Assignment persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Stores a new assignment and returns it with its assigned identifier.
    async fn save(&self, assignment: NewAssignedTask)
    -> AssignmentRepositoryResult<AssignedTask>;

    /// Returns a user's assignments, oldest first.
    async fn list_for_user(&self, user_id: UserId)
    -> AssignmentRepositoryResult<Vec<AssignedTask>>;
}

/// Errors returned by assignment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentRepositoryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
