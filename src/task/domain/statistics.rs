//! Completion statistics over a task collection.

use super::Task;
use serde::{Deserialize, Serialize};

/// Aggregate completion figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    total_tasks: u64,
    completed_tasks: u64,
    completed_percentage: f64,
}

impl TaskStatistics {
    /// Computes statistics for `tasks`.
    ///
    /// An empty collection reports a completion percentage of `0.0`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total_tasks = count(tasks.iter());
        let completed_tasks = count(tasks.iter().filter(|task| task.is_completed()));
        Self {
            total_tasks,
            completed_tasks,
            completed_percentage: percentage(completed_tasks, total_tasks),
        }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn total_tasks(&self) -> u64 {
        self.total_tasks
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed_tasks(&self) -> u64 {
        self.completed_tasks
    }

    /// Returns completed tasks as a percentage of all tasks.
    #[must_use]
    pub const fn completed_percentage(&self) -> f64 {
        self.completed_percentage
    }
}

fn count<'a>(tasks: impl Iterator<Item = &'a Task>) -> u64 {
    tasks.fold(0, |total, _| total.saturating_add(1))
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "completion is reported as a floating-point percentage"
)]
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
