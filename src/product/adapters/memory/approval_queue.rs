//! In-memory approval queue.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::product::{
    domain::{ApprovalEntry, ApprovalId, NewApprovalEntry},
    ports::{ApprovalQueueError, ApprovalQueueRepository, ApprovalQueueResult},
};

/// Thread-safe in-memory approval queue.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApprovalQueue {
    state: Arc<RwLock<InMemoryQueueState>>,
}

#[derive(Debug, Default)]
struct InMemoryQueueState {
    entries: Vec<ApprovalEntry>,
    last_id: i64,
}

impl InMemoryApprovalQueue {
    /// Creates an empty in-memory queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ApprovalQueueError {
    ApprovalQueueError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ApprovalQueueRepository for InMemoryApprovalQueue {
    async fn save(&self, entry: NewApprovalEntry) -> ApprovalQueueResult<ApprovalEntry> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id = state.last_id.saturating_add(1);
        let stored = entry.into_persisted(ApprovalId::new(state.last_id));
        state.entries.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_date(&self) -> ApprovalQueueResult<Vec<ApprovalEntry>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut entries = state.entries.clone();
        entries.sort_by_key(|entry| (entry.requested_at(), entry.id()));
        Ok(entries)
    }
}
