//! `PostgreSQL` repository implementation for task assignments.

use super::{
    models::{AssignmentRow, NewAssignmentRow},
    schema::assigned_tasks,
};
use crate::persistence::{
    PgPool,
    blocking::{get_conn_with, run_blocking_with},
};
use crate::task::{
    domain::{AssignedTask, AssignmentId, NewAssignedTask, PersistedAssignmentData, TaskId, UserId},
    ports::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed assignment repository.
#[derive(Debug, Clone)]
pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AssignmentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AssignmentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection =
                    get_conn_with(&pool, AssignmentRepositoryError::persistence)?;
                f(&mut connection)
            },
            AssignmentRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    async fn save(
        &self,
        assignment: NewAssignedTask,
    ) -> AssignmentRepositoryResult<AssignedTask> {
        let new_row = to_new_row(&assignment);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(assigned_tasks::table)
                .values(&new_row)
                .returning(AssignmentRow::as_returning())
                .get_result::<AssignmentRow>(connection)
                .map_err(AssignmentRepositoryError::persistence)?;
            Ok(row_to_assignment(row))
        })
        .await
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> AssignmentRepositoryResult<Vec<AssignedTask>> {
        self.run_blocking(move |connection| {
            let rows = assigned_tasks::table
                .filter(assigned_tasks::user_id.eq(user_id.value()))
                .order((assigned_tasks::assigned_at.asc(), assigned_tasks::id.asc()))
                .select(AssignmentRow::as_select())
                .load::<AssignmentRow>(connection)
                .map_err(AssignmentRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_assignment).collect())
        })
        .await
    }
}

pub(super) fn to_new_row(assignment: &NewAssignedTask) -> NewAssignmentRow {
    NewAssignmentRow {
        task_id: assignment.task_id().value(),
        user_id: assignment.user_id().value(),
        assigned_at: assignment.assigned_at(),
    }
}

pub(super) fn row_to_assignment(row: AssignmentRow) -> AssignedTask {
    AssignedTask::from_persisted(PersistedAssignmentData {
        id: AssignmentId::new(row.id),
        task_id: TaskId::new(row.task_id),
        user_id: UserId::new(row.user_id),
        assigned_at: row.assigned_at,
    })
}
