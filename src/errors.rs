//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Persistence failure when talking to `MySQL`.
    Db(String),
    /// Every connection attempt failed; no usable session exists.
    ConnectionExhausted {
        /// Total connection attempts made before giving up.
        attempts: u32,
        /// Text of the last underlying connection error.
        last: String,
    },
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Db(msg) => write!(f, "db: {msg}"),
            Self::ConnectionExhausted { attempts, last } => {
                write!(f, "connection exhausted after {attempts} attempt(s): {last}")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Db(err.to_string())
    }
}
