use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_DATABASE_URI: &str = "sqlite::memory:";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    /// Connection target; an in-process ephemeral SQLite store when unset.
    pub database_uri: String,
    pub db_pool_size: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = get("PORT").unwrap_or_else(|| "8000".to_string()).parse().context("PORT")?;

        let database_uri = get("DATABASE_URI")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URI.to_string());

        let db_pool_size: u32 =
            get("DB_POOL_SIZE").and_then(|s| s.parse().ok()).unwrap_or(1).max(1);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_uri,
            db_pool_size,
        })
    }

    /// Loopback config backed by a fresh in-memory database.
    pub fn in_memory() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database_uri: DEFAULT_DATABASE_URI.to_string(),
            db_pool_size: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr.to_string(), "0.0.0.0:8000");
        assert_eq!(config.database_uri, DEFAULT_DATABASE_URI);
        assert_eq!(config.db_pool_size, 1);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9001"),
            ("DATABASE_URI", "sqlite://movies.db?mode=rwc"),
            ("DB_POOL_SIZE", "4"),
        ])
        .unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:9001");
        assert_eq!(config.database_uri, "sqlite://movies.db?mode=rwc");
        assert_eq!(config.db_pool_size, 4);
    }

    #[test]
    fn blank_database_uri_falls_back_to_memory() {
        let config = load(&[("DATABASE_URI", "  ")]).unwrap();
        assert_eq!(config.database_uri, DEFAULT_DATABASE_URI);
    }

    #[test]
    fn pool_size_is_at_least_one() {
        assert_eq!(load(&[("DB_POOL_SIZE", "0")]).unwrap().db_pool_size, 1);
        assert_eq!(load(&[("DB_POOL_SIZE", "lots")]).unwrap().db_pool_size, 1);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
