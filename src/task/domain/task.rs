//! Task record, status and progress types.

use super::{ParseTaskStatusError, TaskDomainError, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task work status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not begun.
    #[serde(rename = "NOT_STARTED")]
    NotStarted,
    /// Work is under way.
    #[serde(rename = "INPROGRESS")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "INPROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Parses a status, ignoring case, underscores and inner spaces so
    /// `in_progress`, `In Progress` and `INPROGRESS` all match.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| *ch != '_' && !ch.is_whitespace())
            .map(|ch| ch.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "NOTSTARTED" => Ok(Self::NotStarted),
            "INPROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Completion percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TaskProgress(u8);

impl TaskProgress {
    /// Upper bound for progress values.
    pub const MAX: u8 = 100;

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ProgressOutOfRange`] above [`Self::MAX`].
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value > Self::MAX {
            return Err(TaskDomainError::ProgressOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TaskProgress {
    type Error = TaskDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskProgress> for u8 {
    fn from(progress: TaskProgress) -> Self {
        progress.0
    }
}

/// Task that has not been persisted yet.
///
/// New tasks always start as [`TaskStatus::NotStarted`] with zero progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    due_date: NaiveDate,
}

impl NewTask {
    /// Creates a validated task draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] for a blank title.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: description.into(),
            due_date,
        })
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::NotStarted
    }

    /// Returns the initial progress.
    #[must_use]
    pub const fn progress(&self) -> TaskProgress {
        TaskProgress(0)
    }

    /// Attaches a store-assigned identifier.
    #[must_use]
    pub fn into_persisted(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: TaskStatus::NotStarted,
            progress: TaskProgress(0),
        }
    }
}

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: NaiveDate,
    status: TaskStatus,
    progress: TaskProgress,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted progress.
    pub progress: TaskProgress,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            progress: data.progress,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the current progress.
    #[must_use]
    pub const fn progress(&self) -> TaskProgress {
        self.progress
    }

    /// Returns `true` when the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed)
    }

    /// Replaces the status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces the progress.
    pub const fn set_progress(&mut self, progress: TaskProgress) {
        self.progress = progress;
    }
}
