//! # User model
//!
//! Defines the two representations of a Ripple user:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries and contains
//! every column:
//!
//! - `id` — primary key (`UUID v4`).
//! - `name` — display name shown on posts and the profile page.
//! - `email` — unique; also the login identifier.
//! - `bio` — optional profile text, `NULL` until the user writes one.
//! - `password_hash` — Argon2 PHC string, never sent to the client.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can
//! cross the server/client boundary via Dioxus server functions. It omits the
//! password hash and converts the `Uuid` and timestamp to `String`s so it
//! works in WASM. The creation timestamp stays in because the profile page
//! shows the join date.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    /// RFC 3339; rendered as the "Joined:" date on the profile page.
    pub created_at: String,
}

impl UserInfo {
    /// Handle shown under the display name: the email's local part.
    pub fn handle(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }

    /// The author fields embedded in this user's feed entries.
    pub fn as_author(&self) -> store::AuthorInfo {
        store::AuthorInfo {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(email: &str) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: email.to_string(),
            bio: None,
            created_at: "2026-01-05T09:30:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_handle_is_the_email_local_part() {
        assert_eq!(info("alice@example.com").handle(), "alice");
        assert_eq!(info("a.b+tag@example.com").handle(), "a.b+tag");
        // Degenerate input still yields something printable.
        assert_eq!(info("no-at-sign").handle(), "no-at-sign");
    }

    #[test]
    fn test_as_author_carries_id_and_name() {
        let author = info("alice@example.com").as_author();
        assert_eq!(author.id, "u1");
        assert_eq!(author.name, "Alice");
    }
}
