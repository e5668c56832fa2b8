//! Database connection settings read from `DB_*` environment variables.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// A configuration value that is present but cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Connection settings for the PostgreSQL well store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | (empty)     |
    /// | `DB_NAME`            | `wells_db`  |
    /// | `DB_SSLMODE`         | `disable`   |
    /// | `DB_MAX_CONNECTIONS` | `20`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: get("DB_HOST", "localhost"),
            port: parse_value("DB_PORT", get("DB_PORT", "5432"))?,
            user: get("DB_USER", "postgres"),
            password: get("DB_PASSWORD", ""),
            database: get("DB_NAME", "wells_db"),
            ssl_mode: parse_value("DB_SSLMODE", get("DB_SSLMODE", "disable"))?,
            max_connections: parse_value("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS", "20"))?,
        })
    }

    /// Connection options for [`crate::create_pool`].
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(self.ssl_mode)
    }
}

/// Parse `value` for `key`, keeping the raw text in the error.
pub fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
