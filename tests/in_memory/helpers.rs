//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use productsdata::{
    product::{
        adapters::memory::{InMemoryApprovalQueue, InMemoryProductRepository},
        domain::Product,
        services::{
            ApprovalWorkflowService, CreateProductRequest, ProductCatalogService,
            ProductQueryService,
        },
    },
    task::{
        adapters::memory::{
            InMemoryAssignmentRepository, InMemoryTaskRepository, InMemoryUserRepository,
        },
        services::TaskService,
    },
};
use rstest::fixture;
use rust_decimal::Decimal;

/// Task service wired to in-memory adapters.
pub type MemoryTaskService = TaskService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryAssignmentRepository,
    DefaultClock,
>;

/// Product services sharing one in-memory product store and queue.
pub struct Catalogue {
    pub products: Arc<InMemoryProductRepository>,
    pub queue: Arc<InMemoryApprovalQueue>,
    pub catalogue: ProductCatalogService<InMemoryProductRepository, DefaultClock>,
    pub query: ProductQueryService<InMemoryProductRepository>,
    pub approvals:
        ApprovalWorkflowService<InMemoryProductRepository, InMemoryApprovalQueue, DefaultClock>,
}

/// Provides product services over fresh in-memory adapters.
#[fixture]
pub fn catalogue() -> Catalogue {
    let products = Arc::new(InMemoryProductRepository::new());
    let queue = Arc::new(InMemoryApprovalQueue::new());
    let clock = Arc::new(DefaultClock);
    Catalogue {
        catalogue: ProductCatalogService::new(Arc::clone(&products), Arc::clone(&clock)),
        query: ProductQueryService::new(Arc::clone(&products)),
        approvals: ApprovalWorkflowService::new(
            Arc::clone(&products),
            Arc::clone(&queue),
            clock,
        ),
        products,
        queue,
    }
}

/// Provides a task service over fresh in-memory adapters.
#[fixture]
pub fn task_service() -> MemoryTaskService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryAssignmentRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Creates a product priced in whole cents.
///
/// # Errors
///
/// Returns an error if product creation fails.
pub async fn create_product(
    catalogue: &Catalogue,
    name: &str,
    cents: i64,
    status: &str,
) -> Result<Product, eyre::Report> {
    let request = CreateProductRequest::new(name, Decimal::new(cents, 2)).with_status(status);
    Ok(catalogue.catalogue.create_product(request).await?)
}

/// Returns a fixed due date.
///
/// # Errors
///
/// Returns an error if the calendar date is invalid.
pub fn due_date() -> Result<NaiveDate, eyre::Report> {
    NaiveDate::from_ymd_opt(2025, 1, 31).ok_or_else(|| eyre::eyre!("invalid due date"))
}
