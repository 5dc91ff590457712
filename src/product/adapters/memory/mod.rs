//! In-memory adapters for product catalogue ports.

mod approval_queue;
mod product;

pub use approval_queue::InMemoryApprovalQueue;
pub use product::InMemoryProductRepository;
