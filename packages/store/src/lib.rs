pub mod cache;
pub mod feed;
pub mod models;

pub use cache::{FeedEvent, FeedStore, FeedSubscription};
pub use feed::{FeedFetcher, FeedRequest, FetchError};
pub use models::{AuthorInfo, PostInfo};
