//! `PostgreSQL` adapters for product catalogue persistence.

mod approval_queue;
mod models;
mod product;
mod schema;

pub use approval_queue::PostgresApprovalQueue;
pub use product::PostgresProductRepository;
