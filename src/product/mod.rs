//! Product catalogue management for Productsdata.
//!
//! This module covers creating products, listing active products, searching
//! by filter criteria, and the soft-delete workflow: deleting a product
//! queues a pending approval entry instead of removing the record. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
