//! Port contracts for the product catalogue.
//!
//! Ports define infrastructure-agnostic interfaces used by product services.

pub mod approval_queue;
pub mod product_repository;

pub use approval_queue::{ApprovalQueueError, ApprovalQueueRepository, ApprovalQueueResult};
pub use product_repository::{ProductRepository, ProductRepositoryError, ProductRepositoryResult};

#[cfg(test)]
pub use approval_queue::MockApprovalQueueRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
