//! Adapter implementations for product catalogue ports.

pub mod memory;
pub mod postgres;
