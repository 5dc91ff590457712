//! `PostgreSQL` repository implementation for tasks.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::persistence::{
    PgPool,
    blocking::{get_conn_with, run_blocking_with},
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskProgress, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, TaskRepositoryError::persistence)?;
                f(&mut connection)
            },
            TaskRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn save(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(&task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }
}

pub(super) fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        due_date: task.due_date(),
        status: task.status().as_str().to_owned(),
        progress: i16::from(task.progress().value()),
    }
}

pub(super) fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        due_date: task.due_date(),
        status: task.status().as_str().to_owned(),
        progress: i16::from(task.progress().value()),
    }
}

pub(super) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        due_date,
        status: persisted_status,
        progress: persisted_progress,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let raw_progress =
        u8::try_from(persisted_progress).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let progress =
        TaskProgress::new(raw_progress).map_err(TaskRepositoryError::invalid_persisted_data)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        due_date,
        status,
        progress,
    }))
}
