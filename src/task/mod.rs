//! Task tracking for Productsdata.
//!
//! This module covers creating tasks and users, updating task status and
//! progress, assigning tasks to users, and reporting completion statistics
//! across the task collection. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
