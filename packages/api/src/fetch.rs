//! # ServerFetcher — feed loading over server functions
//!
//! Implements [`store::FeedFetcher`] by dispatching each [`FeedRequest`]
//! variant to the matching server function. Because requests are a closed
//! enum there is no unknown-key failure mode; adding a feed means adding a
//! variant here and a match arm below.
//!
//! A failed call surfaces as a [`FetchError`] carrying the message the server
//! attached to the response, or the transport error's text when the call
//! never completed.

use store::{FeedFetcher, FeedRequest, FetchError, PostInfo};

/// Loads feeds by calling the server functions in this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFetcher;

impl FeedFetcher for ServerFetcher {
    async fn fetch(&self, request: &FeedRequest) -> Result<Vec<PostInfo>, FetchError> {
        match request {
            FeedRequest::AllPosts => {
                let response = crate::get_posts()
                    .await
                    .map_err(|e| FetchError::new(e.to_string()))?;
                if response.success {
                    Ok(response.posts)
                } else {
                    Err(FetchError::new(
                        response
                            .message
                            .unwrap_or_else(|| "Failed to fetch posts.".to_string()),
                    ))
                }
            }
            FeedRequest::UserPosts { user_id } => {
                let response = crate::get_user_posts(user_id.clone())
                    .await
                    .map_err(|e| FetchError::new(e.to_string()))?;
                if response.success {
                    Ok(response.posts)
                } else {
                    Err(FetchError::new(
                        response
                            .message
                            .unwrap_or_else(|| "Failed to fetch user's posts.".to_string()),
                    ))
                }
            }
        }
    }
}
