//! Structured logging bootstrap.
//!
//! Library code only emits `tracing` events; binaries and test harnesses
//! call [`init`] once to install a subscriber.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Output format for the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TelemetryFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Single-line human-readable output.
    Compact,
}

/// Error returned when a global subscriber cannot be installed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(pub String);

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber is already set.
pub fn init(format: TelemetryFormat) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match format {
        TelemetryFormat::Json => builder.json().try_init(),
        TelemetryFormat::Compact => builder.compact().try_init(),
    };
    result.map_err(|err| TelemetryError(err.to_string()))
}
