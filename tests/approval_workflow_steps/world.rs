//! Shared world state for approval workflow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use productsdata::{
    product::{
        adapters::memory::{InMemoryApprovalQueue, InMemoryProductRepository},
        domain::ProductId,
        services::ApprovalWorkflowService,
    },
    response::{ApiReply, MessageResponse},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestApprovalService =
    ApprovalWorkflowService<InMemoryProductRepository, InMemoryApprovalQueue, DefaultClock>;

/// Scenario world for approval workflow behaviour tests.
pub struct ApprovalWorkflowWorld {
    pub products: Arc<InMemoryProductRepository>,
    pub queue: Arc<InMemoryApprovalQueue>,
    pub service: TestApprovalService,
    pub target: Option<ProductId>,
    pub last_reply: Option<ApiReply<MessageResponse>>,
}

impl ApprovalWorkflowWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let products = Arc::new(InMemoryProductRepository::new());
        let queue = Arc::new(InMemoryApprovalQueue::new());
        let service = ApprovalWorkflowService::new(
            Arc::clone(&products),
            Arc::clone(&queue),
            Arc::new(DefaultClock),
        );

        Self {
            products,
            queue,
            service,
            target: None,
            last_reply: None,
        }
    }
}

impl Default for ApprovalWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ApprovalWorkflowWorld {
    ApprovalWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
