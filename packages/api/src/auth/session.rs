//! Session key and the session → user lookup shared by server functions.

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Resolve the session's user id to a full [`crate::models::User`] row.
/// A missing key, an id that no longer parses, or an id with no matching row
/// all come back as `Ok(None)`.
#[cfg(feature = "server")]
pub async fn session_user(
    session: &tower_sessions::Session,
    pool: &sqlx::PgPool,
) -> Result<Option<crate::models::User>, crate::error::ActionError> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let Ok(user_uuid) = uuid::Uuid::parse_str(&user_id) else {
        return Ok(None);
    };

    Ok(crate::db::user_repo::find_by_id(pool, user_uuid).await?)
}
