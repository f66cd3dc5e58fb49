//! Environment-sourced configuration, built once at process start.
//!
//! Connection parameters are read from the environment a single time
//! and passed into the connector and initializer as an immutable
//! struct; business logic never reads ambient state.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::retry::RetryPolicy;
use crate::{AppError, Result};

/// Connection parameters for the `MySQL` database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Database server hostname.
    pub host: String,
    /// Database server port.
    pub port: u16,
    /// Login user.
    pub user: String,
    /// Login credential.
    pub password: String,
    /// Database (schema) name.
    pub database: String,
}

/// Full application configuration, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database connection parameters.
    pub db: DbConfig,
    /// Port the HTTP surface binds on all interfaces.
    pub http_port: u16,
    /// Bounded-retry policy for connection establishment.
    pub retry: RetryPolicy,
}

impl AppConfig {
    /// Build configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a numeric variable fails to
    /// parse or validation rejects a value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults suitable for a co-located
    /// database container.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a numeric value fails to parse,
    /// a required string is empty, or `DB_CONNECT_RETRIES` is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            db: DbConfig {
                host: lookup_or(&lookup, "MYSQL_HOST", "db"),
                port: parse_or(&lookup, "MYSQL_PORT", 3306)?,
                user: lookup_or(&lookup, "MYSQL_USER", "user"),
                password: lookup_or(&lookup, "MYSQL_PASSWORD", "password"),
                database: lookup_or(&lookup, "MYSQL_DATABASE", "mydatabase"),
            },
            http_port: parse_or(&lookup, "HTTP_PORT", 5000)?,
            retry: RetryPolicy::new(
                parse_or(&lookup, "DB_CONNECT_RETRIES", 5)?,
                Duration::from_secs(parse_or(&lookup, "DB_CONNECT_RETRY_SECONDS", 5)?),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("MYSQL_HOST", &self.db.host),
            ("MYSQL_USER", &self.db.user),
            ("MYSQL_PASSWORD", &self.db.password),
            ("MYSQL_DATABASE", &self.db.database),
        ] {
            if value.is_empty() {
                return Err(AppError::Config(format!("{key} must not be empty")));
            }
        }

        if self.retry.max_attempts == 0 {
            return Err(AppError::Config(
                "DB_CONNECT_RETRIES must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

fn lookup_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_owned())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| AppError::Config(format!("invalid {key}: {err}"))),
        None => Ok(default),
    }
}
