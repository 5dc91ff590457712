//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// Progress lies outside `0..=100`.
    #[error("task progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),

    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
