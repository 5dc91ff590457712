//! Diesel row models for task tracking persistence.

use super::schema::{assigned_tasks, tasks, users};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Status in storage form.
    pub status: String,
    /// Completion percentage.
    pub progress: i16,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Status in storage form.
    pub status: String,
    /// Completion percentage.
    pub progress: i16,
}

/// Update model for task records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Status in storage form.
    pub status: String,
    /// Completion percentage.
    pub progress: i16,
}

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
}

/// Query result row for assignment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assigned_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AssignmentRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Assigned task.
    pub task_id: i64,
    /// Assignee.
    pub user_id: i64,
    /// Assignment timestamp.
    pub assigned_at: DateTime<Utc>,
}

/// Insert model for assignment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = assigned_tasks)]
pub struct NewAssignmentRow {
    /// Assigned task.
    pub task_id: i64,
    /// Assignee.
    pub user_id: i64,
    /// Assignment timestamp.
    pub assigned_at: DateTime<Utc>,
}
