//! Runtime configuration, read once from the environment at startup.

use std::net::SocketAddr;

use anyhow::Context;

use barstock_infra::DbSettings;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://DRS25.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DbSettings,
}

impl AppConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR` and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!("DATABASE_URL not set; using {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.to_string()
        });

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_raw:?}"))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw:?}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            bind_addr,
            database: DbSettings { url, max_connections },
        })
    }

    /// Private in-memory database on an ephemeral local port.
    pub fn in_memory() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database: DbSettings {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:///var/lib/barstock/stock.db"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.database.url, "sqlite:///var/lib/barstock/stock.db");
        assert_eq!(cfg.database.max_connections, 2);
        assert!(!cfg.database.is_in_memory());
    }

    #[test]
    fn malformed_values_are_startup_errors() {
        assert!(AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-addr")])).is_err());
        assert!(
            AppConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")])).is_err()
        );
    }

    #[test]
    fn in_memory_config_is_detected() {
        assert!(AppConfig::in_memory().database.is_in_memory());
    }
}
