//! # Post models (server only)
//!
//! Two row shapes, both projecting into the client-safe [`store::PostInfo`]:
//!
//! - [`Post`] — the bare `posts` row, as returned by an insert. The author is
//!   attached from the session user, which is already loaded at that point.
//! - [`PostWithAuthor`] — a post joined with its author's display fields, as
//!   returned by the feed queries.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use store::{AuthorInfo, PostInfo};

use crate::models::User;

/// A `posts` row.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Convert to PostInfo, embedding the given author.
    pub fn to_info(&self, author: &User) -> PostInfo {
        PostInfo {
            id: self.id.to_string(),
            content: self.content.clone(),
            author: AuthorInfo {
                id: author.id.to_string(),
                name: author.name.clone(),
            },
            created_at: self.created_at.to_rfc3339(),
            placeholder: false,
        }
    }
}

/// A post joined with its author, as the feed queries return it.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl PostWithAuthor {
    /// Convert to PostInfo for client consumption.
    pub fn to_info(&self) -> PostInfo {
        PostInfo {
            id: self.id.to_string(),
            content: self.content.clone(),
            author: AuthorInfo {
                id: self.author_id.to_string(),
                name: self.author_name.clone(),
            },
            created_at: self.created_at.to_rfc3339(),
            placeholder: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_ID: &str = "5f2f6f3e-9d3e-4c6a-8f1b-2a4d8c9e0b11";
    const POST_ID: &str = "0b7c1d2e-3f40-4a5b-8c6d-7e8f90a1b2c3";

    fn timestamp() -> DateTime<Utc> {
        "2026-08-24T15:05:00Z".parse().unwrap()
    }

    fn row_user() -> User {
        User {
            id: Uuid::parse_str(USER_ID).unwrap(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            bio: None,
            password_hash: "$argon2id$stub".to_string(),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    #[test]
    fn test_post_projection_embeds_author_and_formats_rfc3339() {
        let post = Post {
            id: Uuid::parse_str(POST_ID).unwrap(),
            author_id: Uuid::parse_str(USER_ID).unwrap(),
            content: "hello".to_string(),
            created_at: timestamp(),
        };

        let info = post.to_info(&row_user());
        assert_eq!(info.id, POST_ID);
        assert_eq!(info.author.id, USER_ID);
        assert_eq!(info.author.name, "Alice");
        assert_eq!(info.created_at, "2026-08-24T15:05:00+00:00");
        assert!(!info.placeholder);
    }

    #[test]
    fn test_joined_row_projection_is_never_a_placeholder() {
        let row = PostWithAuthor {
            id: Uuid::parse_str(POST_ID).unwrap(),
            content: "hello".to_string(),
            author_id: Uuid::parse_str(USER_ID).unwrap(),
            author_name: "Alice".to_string(),
            created_at: timestamp(),
        };

        let info = row.to_info();
        assert_eq!(info.author.name, "Alice");
        assert_eq!(info.created_at, "2026-08-24T15:05:00+00:00");
        assert!(!info.placeholder);
    }
}
