//! `PostgreSQL` adapters for task tracking persistence.

mod assignment;
mod models;
mod schema;
mod task;
mod user;

pub use assignment::PostgresAssignmentRepository;
pub use task::PostgresTaskRepository;
pub use user::PostgresUserRepository;
