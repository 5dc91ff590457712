//! In-memory user repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewUser, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: BTreeMap<UserId, User>,
    last_id: i64,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id = state.last_id.saturating_add(1);
        let stored = user.into_persisted(UserId::new(state.last_id));
        state.users.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }
}
