//! Data models for the application.

#[cfg(feature = "server")]
mod post;
mod user;

#[cfg(feature = "server")]
pub use post::{Post, PostWithAuthor};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
