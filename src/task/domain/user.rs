//! User records.

use super::{TaskDomainError, UserId};
use serde::{Deserialize, Serialize};

/// User that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
}

impl NewUser {
    /// Creates a user draft. Uniqueness is left to the repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyUsername`] for a blank username.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let raw_username = username.into();
        let trimmed = raw_username.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyUsername);
        }
        Ok(Self {
            username: trimmed.to_owned(),
            email: email.into().trim().to_owned(),
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Attaches a store-assigned identifier.
    #[must_use]
    pub fn into_persisted(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: String,
    /// Persisted email address.
    pub email: String,
}

impl User {
    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
