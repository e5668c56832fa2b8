use std::path::PathBuf;
use std::str::FromStr;

use wells_db::config::{parse_value, ConfigError};

/// Which [`wells_db::store::WellStore`] backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store '{other}', expected 'postgres' or 'memory'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8081`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for the database pool to close on shutdown (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// Directory to load HTML templates from. `None` uses the embedded set.
    pub template_dir: Option<PathBuf>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Storage backend.
    pub store: StoreKind,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default    |
    /// |-------------------------|------------|
    /// | `HOST`                  | `0.0.0.0`  |
    /// | `PORT`                  | `8081`     |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`       |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `10`       |
    /// | `TEMPLATE_DIR`          | (embedded) |
    /// | `STATIC_DIR`            | `static`   |
    /// | `WELL_STORE`            | `postgres` |
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
            host: get("HOST", "0.0.0.0"),
            port: parse_value("PORT", get("PORT", "8081"))?,
            request_timeout_secs: parse_value(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS", "30"),
            )?,
            shutdown_timeout_secs: parse_value(
                "SHUTDOWN_TIMEOUT_SECS",
                get("SHUTDOWN_TIMEOUT_SECS", "10"),
            )?,
            template_dir: lookup("TEMPLATE_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            static_dir: PathBuf::from(get("STATIC_DIR", "static")),
            store: parse_value("WELL_STORE", get("WELL_STORE", "postgres"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.shutdown_timeout_secs, 10);
        assert!(config.template_dir.is_none());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.store, StoreKind::Postgres);
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("TEMPLATE_DIR", "/srv/wells/templates"),
            ("STATIC_DIR", "/srv/wells/static"),
            ("WELL_STORE", "Memory"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.template_dir, Some(PathBuf::from("/srv/wells/templates")));
        assert_eq!(config.static_dir, PathBuf::from("/srv/wells/static"));
        assert_eq!(config.store, StoreKind::Memory);
    }

    #[test]
    fn blank_template_dir_means_embedded() {
        let config = ServerConfig::from_lookup(lookup(&[("TEMPLATE_DIR", "  ")])).unwrap();
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn rejects_unknown_store() {
        let err = ServerConfig::from_lookup(lookup(&[("WELL_STORE", "redis")])).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "WELL_STORE", .. });
    }

    #[test]
    fn rejects_bad_timeout() {
        let err =
            ServerConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "-1")])).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "REQUEST_TIMEOUT_SECS", .. });
    }
}
