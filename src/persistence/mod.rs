//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! - [`config`]: environment-driven pool configuration
//! - [`blocking`]: offloading synchronous Diesel calls from the async runtime

pub mod blocking;
pub mod config;

pub use blocking::PgPool;
pub use config::{ConfigError, PgPoolConfig};
