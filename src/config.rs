//! Runtime configuration from the environment (and `.env` via dotenvy).

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL URL; in-memory storage when unset
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub cache_refresh: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "0.0.0.0".to_string(),
            port: 4567,
            database_max_connections: 5,
            cache_refresh: Duration::from_secs(10 * 60),
        }
    }
}

impl Config {
    /// Read configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: var("DATABASE_URL"),
            host: var("HOST").unwrap_or(defaults.host),
            port: parse_var(&var, "PORT")?.unwrap_or(defaults.port),
            database_max_connections: parse_var(&var, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.database_max_connections),
            cache_refresh: parse_var(&var, "CACHE_REFRESH_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_refresh),
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid bind address: {}", e)))
    }
}

fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| AppError::Internal(format!("{} has an invalid value: {}", key, raw)))
        })
        .transpose()
}
