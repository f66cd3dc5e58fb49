//! Read path: produce the display string for the greeting page.
//!
//! The [`MessageSource`] trait decouples the HTTP layer from the
//! database so request handling can be exercised with a stub source.
//! Every outcome maps to a string; no error crosses this boundary.

use std::future::Future;
use std::pin::Pin;

use crate::config::DbConfig;
use crate::persistence::{db, message_repo};
use crate::retry::RetryPolicy;

/// Shown when the table exists but holds no rows.
pub const NO_MESSAGE_TEXT: &str = "No hay mensajes en la base de datos. ¡Algo salió mal!";

/// Display string for a connection that could not be established.
#[must_use]
pub fn connect_error_text(detail: &str) -> String {
    format!("Error: No se pudo conectar a la base de datos: {detail}")
}

/// Display string for a query that failed after connecting.
#[must_use]
pub fn query_error_text(detail: &str) -> String {
    format!("Error al obtener el mensaje: {detail}")
}

/// Supplier of the display string rendered on the greeting page.
pub trait MessageSource: Send + Sync {
    /// Produce the display string for one request.
    ///
    /// Always yields a string; failures are described, not raised.
    fn display_message(&self) -> Pin<Box<dyn Future<Output = String> + Send + '_>>;
}

/// [`MessageSource`] backed by the `MySQL` database.
///
/// Acquires a fresh session per request with the same retry policy
/// used at startup. While the database is down a request therefore
/// blocks for up to `max_attempts x delay` before reporting failure;
/// that window is bounded and deliberate, not a hang.
#[derive(Debug, Clone)]
pub struct DbMessageSource {
    config: DbConfig,
    policy: RetryPolicy,
}

impl DbMessageSource {
    /// Create a source reading from the given database.
    #[must_use]
    pub fn new(config: DbConfig, policy: RetryPolicy) -> Self {
        Self { config, policy }
    }

    async fn fetch(&self) -> String {
        let mut session = match db::open_session(&self.config, self.policy).await {
            Ok(session) => session,
            Err(err) => return connect_error_text(&err.to_string()),
        };

        let fetched = message_repo::first_message(&mut session).await;
        db::close_session(session).await;

        match fetched {
            Ok(Some(message)) => message.content,
            Ok(None) => NO_MESSAGE_TEXT.to_owned(),
            Err(err) => query_error_text(&err.to_string()),
        }
    }
}

impl MessageSource for DbMessageSource {
    fn display_message(&self) -> Pin<Box<dyn Future<Output = String> + Send + '_>> {
        Box::pin(self.fetch())
    }
}
