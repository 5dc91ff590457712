//! Unit tests for task tracking.


use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskProgress, TaskStatus};
use chrono::NaiveDate;

pub(super) fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 20).expect("valid due date")
}

pub(super) fn stored_task(id: i64, status: TaskStatus) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: format!("Task {id}"),
        description: String::new(),
        due_date: due_date(),
        status,
        progress: TaskProgress::default(),
    })
}
