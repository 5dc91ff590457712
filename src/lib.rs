//! Productsdata: product catalogue and task tracking core.
//!
//! This crate provides the domain logic behind a product/task management
//! backend: a product catalogue whose deletions are staged through an
//! approval queue, and a task tracker with users, assignments and completion
//! statistics.
//!
//! # Architecture
//!
//! Productsdata follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration of ports into use cases
//!
//! # Modules
//!
//! - [`product`]: Product catalogue, search and approval-queue deletion
//! - [`task`]: Tasks, users, assignments and statistics
//! - [`response`]: Uniform message envelope and reply status mapping
//! - [`persistence`]: Connection pool configuration for `PostgreSQL` adapters
//! - [`telemetry`]: Structured logging bootstrap

pub mod persistence;
pub mod product;
pub mod response;
pub mod task;
pub mod telemetry;
