//! Approval-queue entries staging destructive product actions.

use super::{ApprovalId, ParseApprovalActionError, Product, ProductId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action awaiting approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalAction {
    /// The product should be deleted once approved.
    PendingDeletion,
}

impl ApprovalAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingDeletion => "PENDING_DELETION",
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ApprovalAction {
    type Error = ParseApprovalActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING_DELETION" => Ok(Self::PendingDeletion),
            _ => Err(ParseApprovalActionError(value.to_owned())),
        }
    }
}

/// Approval entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApprovalEntry {
    product_id: ProductId,
    action: ApprovalAction,
    requested_at: DateTime<Utc>,
}

impl NewApprovalEntry {
    /// Creates a pending-deletion entry for a product that was just fetched.
    #[must_use]
    pub fn pending_deletion(product: &Product, clock: &impl Clock) -> Self {
        Self {
            product_id: product.id(),
            action: ApprovalAction::PendingDeletion,
            requested_at: clock.utc(),
        }
    }

    /// Returns the referenced product.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the requested action.
    #[must_use]
    pub const fn action(&self) -> ApprovalAction {
        self.action
    }

    /// Returns when the action was requested.
    #[must_use]
    pub const fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    /// Attaches a store-assigned identifier.
    #[must_use]
    pub const fn into_persisted(self, id: ApprovalId) -> ApprovalEntry {
        ApprovalEntry {
            id,
            product_id: self.product_id,
            action: self.action,
            requested_at: self.requested_at,
        }
    }
}

/// Persisted approval-queue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalEntry {
    id: ApprovalId,
    product_id: ProductId,
    action: ApprovalAction,
    requested_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted approval entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedApprovalData {
    /// Persisted identifier.
    pub id: ApprovalId,
    /// Referenced product.
    pub product_id: ProductId,
    /// Requested action.
    pub action: ApprovalAction,
    /// Request timestamp.
    pub requested_at: DateTime<Utc>,
}

impl ApprovalEntry {
    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedApprovalData) -> Self {
        Self {
            id: data.id,
            product_id: data.product_id,
            action: data.action,
            requested_at: data.requested_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ApprovalId {
        self.id
    }

    /// Returns the referenced product.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the requested action.
    #[must_use]
    pub const fn action(&self) -> ApprovalAction {
        self.action
    }

    /// Returns when the action was requested.
    #[must_use]
    pub const fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
}
