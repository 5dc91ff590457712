//! Domain model for task tracking.
//!
//! Tasks carry a status and a bounded progress value, users own
//! assignments, and [`TaskStatistics`] summarises completion across a task
//! collection. Infrastructure concerns stay outside this boundary.

mod assignment;
mod error;
mod ids;
mod statistics;
mod task;
mod user;

pub use assignment::{AssignedTask, NewAssignedTask, PersistedAssignmentData};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{AssignmentId, TaskId, UserId};
pub use statistics::TaskStatistics;
pub use task::{NewTask, PersistedTaskData, Task, TaskProgress, TaskStatus};
pub use user::{NewUser, PersistedUserData, User};
