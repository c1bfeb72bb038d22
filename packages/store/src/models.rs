//! # Feed data models
//!
//! Defines the data structures cached by [`crate::FeedStore`] and returned by
//! server functions when listing or creating posts. These types are
//! `Serialize + Deserialize` so they can cross the server/client boundary via
//! Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`PostInfo`] | A single feed entry: server-assigned `id`, body `content`, the embedded [`AuthorInfo`], an RFC 3339 `created_at`, and a `placeholder` flag. Server-produced values always have `placeholder == false`; only the client cache constructs placeholders while a submission is in flight. |
//! | [`AuthorInfo`] | The post author as shown in a feed: `id` and display `name`. |
//!
//! Placeholder entries use a `local-<n>` id and an empty timestamp. They never
//! reach the server and never survive a reload, because the cache holding them
//! is in-memory only.

use serde::{Deserialize, Serialize};

/// The author of a post, as embedded in feed entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    /// User id as a string: "5f0c…"
    pub id: String,
    /// Display name: "Alice"
    pub name: String,
}

/// A post with its author attached, ready for feed rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    /// Server-assigned id, or "local-<n>" for placeholders
    pub id: String,
    /// Body text of the post
    pub content: String,
    /// Author shown next to the post
    pub author: AuthorInfo,
    /// RFC 3339 creation timestamp; empty for placeholders
    pub created_at: String,
    /// True while this entry only exists client-side
    pub placeholder: bool,
}

impl PostInfo {
    /// True once the server has assigned this entry an id and timestamp.
    pub fn is_confirmed(&self) -> bool {
        !self.placeholder
    }
}
