// src/config.rs
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// SQLite file backing every collection.
    pub database_path: String,
    pub max_workers: usize,
    /// Cap on JSON request bodies.
    pub max_body_bytes: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            database_path: "zeecurity.sqlite3".to_string(),
            max_workers: 8,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_filter: "zeecurity=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("HOST") {
            cfg.host = parse("HOST", v)?;
        }
        if let Some(v) = lookup("PORT") {
            cfg.port = parse("PORT", v)?;
        }
        if let Some(v) = lookup("DATABASE_PATH").filter(|v| !v.trim().is_empty()) {
            cfg.database_path = v.trim().to_string();
        }
        if let Some(v) = lookup("MAX_WORKERS") {
            cfg.max_workers = parse("MAX_WORKERS", v)?;
            if cfg.max_workers == 0 {
                return Err(ConfigError::Invalid {
                    key: "MAX_WORKERS",
                    value: "0".into(),
                });
            }
        }
        if let Some(v) = lookup("MAX_BODY_BYTES") {
            cfg.max_body_bytes = parse("MAX_BODY_BYTES", v)?;
        }
        if let Some(v) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            cfg.log_filter = v;
        }

        Ok(cfg)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
