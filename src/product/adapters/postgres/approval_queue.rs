//! `PostgreSQL` implementation of the approval queue.

use super::{
    models::{ApprovalRow, NewApprovalRow},
    schema::approval_queue,
};
use crate::persistence::{
    PgPool,
    blocking::{get_conn_with, run_blocking_with},
};
use crate::product::{
    domain::{
        ApprovalAction, ApprovalEntry, ApprovalId, NewApprovalEntry, PersistedApprovalData,
        ProductId,
    },
    ports::{ApprovalQueueError, ApprovalQueueRepository, ApprovalQueueResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed approval queue.
#[derive(Debug, Clone)]
pub struct PostgresApprovalQueue {
    pool: PgPool,
}

impl PostgresApprovalQueue {
    /// Creates a new queue from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ApprovalQueueResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ApprovalQueueResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, ApprovalQueueError::persistence)?;
                f(&mut connection)
            },
            ApprovalQueueError::persistence,
        )
        .await
    }
}

#[async_trait]
impl ApprovalQueueRepository for PostgresApprovalQueue {
    async fn save(&self, entry: NewApprovalEntry) -> ApprovalQueueResult<ApprovalEntry> {
        let new_row = to_new_row(&entry);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(approval_queue::table)
                .values(&new_row)
                .returning(ApprovalRow::as_returning())
                .get_result::<ApprovalRow>(connection)
                .map_err(ApprovalQueueError::persistence)?;
            row_to_entry(row)
        })
        .await
    }

    async fn list_by_date(&self) -> ApprovalQueueResult<Vec<ApprovalEntry>> {
        self.run_blocking(|connection| {
            let rows = approval_queue::table
                .order((approval_queue::requested_at.asc(), approval_queue::id.asc()))
                .select(ApprovalRow::as_select())
                .load::<ApprovalRow>(connection)
                .map_err(ApprovalQueueError::persistence)?;
            rows.into_iter().map(row_to_entry).collect()
        })
        .await
    }
}

pub(super) fn to_new_row(entry: &NewApprovalEntry) -> NewApprovalRow {
    NewApprovalRow {
        product_id: entry.product_id().value(),
        action: entry.action().as_str().to_owned(),
        requested_at: entry.requested_at(),
    }
}

pub(super) fn row_to_entry(row: ApprovalRow) -> ApprovalQueueResult<ApprovalEntry> {
    let action = ApprovalAction::try_from(row.action.as_str())
        .map_err(ApprovalQueueError::invalid_persisted_data)?;
    Ok(ApprovalEntry::from_persisted(PersistedApprovalData {
        id: ApprovalId::new(row.id),
        product_id: ProductId::new(row.product_id),
        action,
        requested_at: row.requested_at,
    }))
}
