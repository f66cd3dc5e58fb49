//! Message entity — the sole persisted row type.

use sqlx::FromRow;

/// Greeting inserted when the table is first found empty.
pub const SEED_MESSAGE: &str = "¡Hola Mundo desde MySQL!";

/// Upper bound on stored message content, in `VARCHAR` units.
pub const MAX_CONTENT_LEN: usize = 255;

/// A single greeting row from the `messages` table.
///
/// Rows are immutable for the lifetime of the process; there is no
/// update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Message {
    /// Auto-assigned monotonically increasing identifier.
    pub id: i32,
    /// Free-text content, at most [`MAX_CONTENT_LEN`] units.
    pub content: String,
}
