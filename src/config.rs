use std::env;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3333;
// Pool size and acquire timeout are fixed; the pool is not tuned from the environment.
pub const MAX_CONNECTIONS: u32 = 10;
pub const ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({details})")]
    Parse {
        key: &'static str,
        value: String,
        details: String,
    },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Startup settings for the listener and the store pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// `None` means the connection is built from the `PG*` variables.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Config { port, database_url })
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.database_url {
            Some(url) => url.parse().map_err(ConfigError::DatabaseUrl),
            // Falls back to PGHOST, PGPORT, PGUSER, PGPASSWORD, PGDATABASE, PGSSLMODE
            None => Ok(PgConnectOptions::new()),
        }
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
    }

    /// Lazy pool: nothing connects until the first query, so the listener
    /// comes up even while the store is down.
    pub fn pool(&self) -> Result<PgPool, ConfigError> {
        let options = self.connect_options()?;
        Ok(self.pool_options().connect_lazy_with(options))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Parse {
            key,
            value: raw.clone(),
            details: e.to_string(),
        }),
    }
}
