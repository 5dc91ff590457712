//! Connection pool configuration for the `PostgreSQL` adapters.

use std::fmt;
use std::time::Duration;

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

use super::PgPool;

/// Environment variable holding the database connection URL.
pub const DATABASE_URL_VAR: &str = "PRODUCTSDATA_DATABASE_URL";
/// Environment variable holding the maximum pool size.
pub const MAX_CONNECTIONS_VAR: &str = "PRODUCTSDATA_DB_MAX_CONNECTIONS";
/// Environment variable holding the connection checkout timeout in seconds.
pub const CONNECT_TIMEOUT_VAR: &str = "PRODUCTSDATA_DB_CONNECT_TIMEOUT_SECS";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required configuration value {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {key}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },

    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// `PostgreSQL` pool settings.
#[derive(Clone, PartialEq, Eq)]
pub struct PgPoolConfig {
    database_url: String,
    max_connections: u32,
    connect_timeout: Duration,
}

impl PgPoolConfig {
    /// Creates a configuration with default pool sizing.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Sets the maximum number of pooled connections.
    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Sets the connection checkout timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is missing or a numeric
    /// setting does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the database URL is absent and
    /// [`ConfigError::Invalid`] when a numeric setting does not parse or is
    /// zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let mut config = Self::new(database_url.trim());
        if let Some(raw) = lookup(MAX_CONNECTIONS_VAR) {
            let max_connections = parse_setting::<u32>(MAX_CONNECTIONS_VAR, &raw)?;
            if max_connections == 0 {
                return Err(ConfigError::Invalid {
                    key: MAX_CONNECTIONS_VAR,
                    value: raw,
                });
            }
            config = config.with_max_connections(max_connections);
        }
        if let Some(raw) = lookup(CONNECT_TIMEOUT_VAR) {
            let seconds = parse_setting::<u64>(CONNECT_TIMEOUT_VAR, &raw)?;
            if seconds == 0 {
                return Err(ConfigError::Invalid {
                    key: CONNECT_TIMEOUT_VAR,
                    value: raw,
                });
            }
            config = config.with_connect_timeout(Duration::from_secs(seconds));
        }
        Ok(config)
    }

    /// Returns the database URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Returns the connection checkout timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Builds an `r2d2` pool of Diesel connections.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the pool size or the timeout is
    /// zero and [`ConfigError::Pool`] when the pool cannot establish its
    /// initial connections.
    pub fn build_pool(&self) -> Result<PgPool, ConfigError> {
        self.validate()?;
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        let pool = Pool::builder()
            .max_size(self.max_connections)
            .connection_timeout(self.connect_timeout)
            .build(manager)?;
        Ok(pool)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: MAX_CONNECTIONS_VAR,
                value: self.max_connections.to_string(),
            });
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: CONNECT_TIMEOUT_VAR,
                value: self.connect_timeout.as_secs().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for PgPoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgPoolConfig")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn parse_setting<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_owned(),
    })
}
