//! This crate contains all shared UI for the workspace: the auth and feed
//! providers, their hooks, and the components the web views compose.

pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod feed;
pub use feed::{use_feed, use_feed_store, AppFeedStore, FeedProvider};

mod navbar;
pub use navbar::Navbar;

mod post_card;
pub use post_card::PostCard;

mod post_feed;
pub use post_feed::PostFeed;

mod create_post_form;
pub use create_post_form::CreatePostForm;

mod profile_card;
pub use profile_card::ProfileCard;

mod edit_profile_form;
pub use edit_profile_form::EditProfileForm;

pub mod time;
