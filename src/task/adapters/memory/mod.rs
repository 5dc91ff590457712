//! In-memory adapters for task tracking ports.

mod assignment;
mod task;
mod user;

pub use assignment::InMemoryAssignmentRepository;
pub use task::InMemoryTaskRepository;
pub use user::InMemoryUserRepository;
