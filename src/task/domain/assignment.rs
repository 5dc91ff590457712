//! Task-to-user assignments.

use super::{AssignmentId, Task, TaskId, User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Assignment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignedTask {
    task_id: TaskId,
    user_id: UserId,
    assigned_at: DateTime<Utc>,
}

impl NewAssignedTask {
    /// Creates an assignment between a task and a user that were both just
    /// fetched.
    #[must_use]
    pub fn new(task: &Task, user: &User, clock: &impl Clock) -> Self {
        Self {
            task_id: task.id(),
            user_id: user.id(),
            assigned_at: clock.utc(),
        }
    }

    /// Returns the assigned task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns when the assignment was made.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Attaches a store-assigned identifier.
    #[must_use]
    pub const fn into_persisted(self, id: AssignmentId) -> AssignedTask {
        AssignedTask {
            id,
            task_id: self.task_id,
            user_id: self.user_id,
            assigned_at: self.assigned_at,
        }
    }
}

/// Persisted assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTask {
    id: AssignmentId,
    task_id: TaskId,
    user_id: UserId,
    assigned_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAssignmentData {
    /// Persisted identifier.
    pub id: AssignmentId,
    /// Assigned task.
    pub task_id: TaskId,
    /// Assignee.
    pub user_id: UserId,
    /// Assignment timestamp.
    pub assigned_at: DateTime<Utc>,
}

impl AssignedTask {
    /// Reconstructs an assignment from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedAssignmentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            user_id: data.user_id,
            assigned_at: data.assigned_at,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the assigned task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns when the assignment was made.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }
}
