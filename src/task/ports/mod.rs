//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod assignment_repository;
pub mod task_repository;
pub mod user_repository;

pub use assignment_repository::{
    AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult,
};
pub use task_repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use user_repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use assignment_repository::MockAssignmentRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
