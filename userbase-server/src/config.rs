//! Database configuration - connection target and retry policy
//!
//! Configuration is loaded from environment variables:
//! - `DB_HOST`: MySQL host (default: db)
//! - `DB_PORT`: MySQL port (default: 3306)
//! - `MYSQL_USER`: user name (default: flaskuser)
//! - `MYSQL_PASSWORD`: password (default: flaskpass)
//! - `MYSQL_DATABASE`: schema name (default: flaskdb)
//! - `DB_CONNECT_ATTEMPTS`: connection attempts before giving up (default: 10)
//! - `DB_CONNECT_DELAY_SECS`: fixed delay between attempts (default: 2)

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

use crate::db::retry::{RetryPolicy, DEFAULT_ATTEMPTS, DEFAULT_DELAY};

pub const DEFAULT_HOST: &str = "db";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "flaskuser";
pub const DEFAULT_PASSWORD: &str = "flaskpass";
pub const DEFAULT_DATABASE: &str = "flaskdb";

/// Database configuration, passed to the connector at construction time
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Connection bootstrap policy
    pub retry: RetryPolicy,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let attempts = parse_or(&lookup, "DB_CONNECT_ATTEMPTS", DEFAULT_ATTEMPTS);
        let delay_secs = parse_or(&lookup, "DB_CONNECT_DELAY_SECS", DEFAULT_DELAY.as_secs());

        Self {
            host: text("DB_HOST", DEFAULT_HOST),
            port: parse_or(&lookup, "DB_PORT", DEFAULT_PORT),
            user: text("MYSQL_USER", DEFAULT_USER),
            password: text("MYSQL_PASSWORD", DEFAULT_PASSWORD),
            database: text("MYSQL_DATABASE", DEFAULT_DATABASE),
            retry: RetryPolicy::new(attempts, Duration::from_secs(delay_secs)),
        }
    }

    /// Replace the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// sqlx connect options for a single connection
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Password stays out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("retry", &self.retry)
            .finish()
    }
}

#[cfg(test)]
impl DbConfig {
    /// Loopback port 1 refuses immediately; no delay between attempts.
    pub(crate) fn unreachable(attempts: u32) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 1,
            ..Self::default()
        }
        .with_retry(RetryPolicy::new(attempts, Duration::ZERO))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, default = %default, "invalid config value, using default");
            default
        }
    }
}
