//! `PostgreSQL` integration tests for the approval queue and deletion flow.

use crate::postgres::helpers::{
    BoxError, PinnedClock, PostgresCluster, TemporaryDatabase, minutes_past, postgres_cluster,
    prepare_database,
};
use productsdata::product::{
    adapters::postgres::{PostgresApprovalQueue, PostgresProductRepository},
    domain::{
        ApprovalAction, ApprovalEntry, NewApprovalEntry, NewProduct, Product, ProductId,
        ProductStatus,
    },
    ports::{ApprovalQueueRepository, ProductRepository},
    services::{ApprovalWorkflowError, ApprovalWorkflowService, DELETION_QUEUED_MESSAGE},
};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use std::sync::Arc;

struct QueueTestContext {
    products: Arc<PostgresProductRepository>,
    queue: Arc<PostgresApprovalQueue>,
    _database: TemporaryDatabase,
}

impl QueueTestContext {
    async fn product(&self, name: &str) -> Result<Product, BoxError> {
        let draft = NewProduct::new(
            name,
            Decimal::new(1000, 2),
            ProductStatus::active(),
            &PinnedClock::at(minutes_past(0)?),
        )?;
        Ok(self.products.insert(draft).await?)
    }

    async fn queue_at(&self, product: &Product, minutes: u32) -> Result<ApprovalEntry, BoxError> {
        let clock = PinnedClock::at(minutes_past(minutes)?);
        Ok(self
            .queue
            .save(NewApprovalEntry::pending_deletion(product, &clock))
            .await?)
    }

    fn workflow(
        &self,
        minutes: u32,
    ) -> Result<
        ApprovalWorkflowService<PostgresProductRepository, PostgresApprovalQueue, PinnedClock>,
        BoxError,
    > {
        Ok(ApprovalWorkflowService::new(
            Arc::clone(&self.products),
            Arc::clone(&self.queue),
            Arc::new(PinnedClock::at(minutes_past(minutes)?)),
        ))
    }
}

#[fixture]
fn context(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<QueueTestContext>, BoxError> {
    let Some(cluster) = postgres_cluster else {
        return Ok(None);
    };
    let (database, pool) = prepare_database(cluster, "approvals")?;
    Ok(Some(QueueTestContext {
        products: Arc::new(PostgresProductRepository::new(pool.clone())),
        queue: Arc::new(PostgresApprovalQueue::new(pool)),
        _database: database,
    }))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saved_entry_is_read_back_unchanged(
    context: Result<Option<QueueTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };

    let product = ctx.product("Desk").await?;
    let saved = ctx.queue_at(&product, 5).await?;
    let listed = ctx.queue.list_by_date().await?;

    assert_eq!(listed, vec![saved.clone()]);
    assert_eq!(saved.product_id(), product.id());
    assert_eq!(saved.action(), ApprovalAction::PendingDeletion);
    assert_eq!(saved.requested_at(), minutes_past(5)?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_orders_by_request_time_then_id(
    context: Result<Option<QueueTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };

    let desk = ctx.product("Desk").await?;
    let chair = ctx.product("Chair").await?;
    let latest = ctx.queue_at(&desk, 30).await?;
    let tied_first = ctx.queue_at(&chair, 10).await?;
    let tied_second = ctx.queue_at(&desk, 10).await?;
    let earliest = ctx.queue_at(&chair, 1).await?;

    let order: Vec<_> = ctx
        .queue
        .list_by_date()
        .await?
        .iter()
        .map(ApprovalEntry::id)
        .collect();
    assert_eq!(
        order,
        vec![earliest.id(), tied_first.id(), tied_second.id(), latest.id()]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_request_queues_entry_and_keeps_product(
    context: Result<Option<QueueTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };
    let product = ctx.product("Lamp").await?;
    let workflow = ctx.workflow(15)?;

    let response = workflow.request_deletion(product.id()).await?;
    assert_eq!(response.message(), DELETION_QUEUED_MESSAGE);

    let listing = workflow.list_approval_queue().await?;
    let entries: Vec<ApprovalEntry> = listing.parse_payload()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.first().map(ApprovalEntry::product_id), Some(product.id()));
    assert!(ctx.products.find_by_id(product.id()).await?.is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_request_for_missing_product_queues_nothing(
    context: Result<Option<QueueTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };
    let workflow = ctx.workflow(15)?;

    let result = workflow.request_deletion(ProductId::new(777)).await;

    assert!(matches!(
        result,
        Err(ApprovalWorkflowError::ProductNotFound(id)) if id == ProductId::new(777)
    ));
    assert!(ctx.queue.list_by_date().await?.is_empty());
    assert_eq!(workflow.list_approval_queue().await?.message(), "[]");
    Ok(())
}
