//! # Feed requests and the fetch seam
//!
//! A feed is identified by a [`FeedRequest`] — a closed enum rather than a
//! string key, so a cache entry can never be addressed by a typo and there is
//! no "unknown key" failure mode to handle at runtime.
//!
//! The cache never performs I/O itself. Whatever loads a feed implements
//! [`FeedFetcher`] and is injected into [`crate::FeedStore`] at construction.
//! The production fetcher dispatches each variant to the matching server
//! function; tests inject a stub.

use serde::{Deserialize, Serialize};

use crate::models::PostInfo;

/// Identifies one cached feed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedRequest {
    /// The home feed: every post, newest first.
    AllPosts,
    /// One user's posts, newest first.
    UserPosts { user_id: String },
}

/// Why a feed could not be loaded. Carries the message the UI shows.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Async interface for loading the posts behind a [`FeedRequest`].
pub trait FeedFetcher {
    fn fetch(
        &self,
        request: &FeedRequest,
    ) -> impl std::future::Future<Output = Result<Vec<PostInfo>, FetchError>>;
}
