//! `MySQL` session establishment with bounded retry.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tracing::warn;

use crate::config::DbConfig;
use crate::retry::{self, RetryPolicy};
use crate::Result;

/// An open, authenticated database session.
///
/// Owned exclusively by the call site that acquired it. No pooling:
/// each acquisition opens a fresh connection, and every exit path
/// must release it with [`close_session`].
pub type Session = MySqlConnection;

fn connect_options(config: &DbConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
}

/// Open a session, retrying per `policy` while the server is
/// unreachable.
///
/// # Errors
///
/// Returns `AppError::ConnectionExhausted` when every attempt fails;
/// the error carries the last underlying connection error.
pub async fn open_session(config: &DbConfig, policy: RetryPolicy) -> Result<Session> {
    let options = connect_options(config);
    retry::acquire(policy, || MySqlConnection::connect_with(&options)).await
}

/// Close a session, logging rather than propagating close failures.
pub async fn close_session(session: Session) {
    if let Err(err) = session.close().await {
        warn!(error = %err, "failed to close database session");
    }
}
