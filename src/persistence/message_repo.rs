//! Read queries over the `messages` table.

use crate::models::message::Message;
use crate::persistence::db::Session;
use crate::Result;

/// Fetch the first message in table order, if any.
///
/// # Errors
///
/// Returns `AppError::Db` if the query fails.
pub async fn first_message(session: &mut Session) -> Result<Option<Message>> {
    let row = sqlx::query_as::<_, Message>("SELECT id, content FROM messages ORDER BY id LIMIT 1")
        .fetch_optional(&mut *session)
        .await?;
    Ok(row)
}
