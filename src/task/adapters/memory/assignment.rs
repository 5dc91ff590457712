//! In-memory assignment repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{AssignedTask, AssignmentId, NewAssignedTask, UserId},
    ports::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult},
};

/// Thread-safe in-memory assignment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRepository {
    state: Arc<RwLock<InMemoryAssignmentState>>,
}

#[derive(Debug, Default)]
struct InMemoryAssignmentState {
    assignments: Vec<AssignedTask>,
    last_id: i64,
}

impl InMemoryAssignmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> AssignmentRepositoryError {
    AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn save(
        &self,
        assignment: NewAssignedTask,
    ) -> AssignmentRepositoryResult<AssignedTask> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id = state.last_id.saturating_add(1);
        let stored = assignment.into_persisted(AssignmentId::new(state.last_id));
        state.assignments.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> AssignmentRepositoryResult<Vec<AssignedTask>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut assignments: Vec<AssignedTask> = state
            .assignments
            .iter()
            .filter(|assignment| assignment.user_id() == user_id)
            .cloned()
            .collect();
        assignments.sort_by_key(|assignment| (assignment.assigned_at(), assignment.id()));
        Ok(assignments)
    }
}
