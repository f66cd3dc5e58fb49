//! Schema bootstrap and seed logic.
//!
//! The table definition uses `CREATE TABLE IF NOT EXISTS` — safe to
//! re-run on every server startup. Produces a convergent result.

use crate::models::message::SEED_MESSAGE;
use crate::persistence::db::{self, Session};
use crate::Result;

/// What [`ensure_ready`] did to the seed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Table was empty at check time; the seed row was inserted.
    Seeded,
    /// Table already held at least one row; nothing was inserted.
    Present,
}

const CREATE_MESSAGES: &str = "\
CREATE TABLE IF NOT EXISTS messages (
    id      INT AUTO_INCREMENT PRIMARY KEY,
    content VARCHAR(255) NOT NULL
)";

/// Bring the schema to a known-good state without destroying data.
///
/// Creates the `messages` table idempotently, then inserts the seed
/// row only when the table is empty at check time. The session is
/// closed on every exit path, success or failure.
///
/// # Errors
///
/// Returns `AppError::Db` if any statement fails. Callers are expected
/// to log the failure and keep serving (degraded) rather than abort
/// startup.
pub async fn ensure_ready(mut session: Session) -> Result<InitOutcome> {
    let outcome = bootstrap(&mut session).await;
    db::close_session(session).await;
    outcome
}

async fn bootstrap(session: &mut Session) -> Result<InitOutcome> {
    sqlx::query(CREATE_MESSAGES).execute(&mut *session).await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(&mut *session)
        .await?;
    if count > 0 {
        return Ok(InitOutcome::Present);
    }

    sqlx::query("INSERT INTO messages (content) VALUES (?)")
        .bind(SEED_MESSAGE)
        .execute(&mut *session)
        .await?;
    Ok(InitOutcome::Seeded)
}
