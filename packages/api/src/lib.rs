//! # API crate — shared fullstack server functions for Ripple
//!
//! This crate is the backbone of the Ripple fullstack architecture. It defines
//! every Dioxus server function the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Email + password authentication, session key, password hashing |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and the post/user queries |
//! | [`error`] | `server` | [`error::ActionError`] taxonomy and its mapping onto user-visible messages |
//! | [`models`] | — | Database models (`User`, `Post`) and their client-safe projections |
//! | [`validation`] | — | Shared validation rules, run in browser forms and on the server |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! twice: once with full server logic (behind the `server` feature) and once
//! as a thin client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Posts**: `create_post`, `get_posts`, `get_user_posts`
//! - **Profiles**: `get_user_by_id`, `update_profile`
//!
//! The post and profile mutation/list calls return *tagged* responses: the
//! operation's own failure is carried in the payload (`success == false` plus
//! a message), and the outer `Result` only fails for transport problems. Each
//! call emits one structured tracing event per outcome.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
mod fetch;
pub mod models;
pub mod validation;

pub use fetch::ServerFetcher;
pub use models::UserInfo;
pub use store::{AuthorInfo, FeedRequest, PostInfo};

/// Outcome of [`create_post`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePostResponse {
    pub success: bool,
    pub message: String,
    pub post: Option<PostInfo>,
}

/// Outcome of [`get_posts`] and [`get_user_posts`]. The message is only
/// present on failure; the post list is empty in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostsResponse {
    pub success: bool,
    pub message: Option<String>,
    pub posts: Vec<PostInfo>,
}

/// Outcome of [`update_profile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub message: String,
    pub user: Option<UserInfo>,
}

/// Get the current authenticated user from the session.
#[server]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::auth::session_user;
    use crate::db::get_pool;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = session_user(&session, pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

/// Register a new user with email and password, then sign the session in.
#[server]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::auth::{hash_password, SESSION_USER_ID_KEY};
    use crate::db::{get_pool, user_repo};
    use crate::validation;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if let Err(violations) = validation::validate_profile(&name, "") {
        return Err(ServerFnError::new(validation::join_messages(&violations)));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing = user_repo::find_by_email(pool, &email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user = user_repo::insert(pool, &name, &email, &password_hash)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(user.to_info())
}

/// Log in with email and password.
#[server]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::auth::{verify_password, SESSION_USER_ID_KEY};
    use crate::db::{get_pool, user_repo};

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = user_repo::find_by_email(pool, &email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(user.to_info())
}

/// Log out the current user by clearing the session.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!("user logged out");
    Ok(())
}

/// Create a post authored by the session user.
///
/// The returned message is always renderable: a sign-in prompt, the collected
/// validation violations, the generic failure line, or the success line.
#[server]
pub async fn create_post(content: String) -> Result<CreatePostResponse, ServerFnError> {
    use crate::auth::session_user;
    use crate::db::{get_pool, post_repo};
    use crate::error::ActionError;
    use crate::validation;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    let result: Result<PostInfo, ActionError> = async {
        let pool = get_pool().await?;
        let user = session_user(&session, pool)
            .await?
            .ok_or(ActionError::Unauthenticated("create a post"))?;

        let content = content.trim().to_string();
        validation::validate_post_content(&content).map_err(ActionError::Validation)?;

        let post = post_repo::insert(pool, user.id, &content).await?;
        Ok(post.to_info(&user))
    }
    .await;

    match result {
        Ok(post) => {
            tracing::info!(post_id = %post.id, author_id = %post.author.id, "post created");
            Ok(CreatePostResponse {
                success: true,
                message: "Post created successfully!".to_string(),
                post: Some(post),
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, "create_post failed");
            Ok(CreatePostResponse {
                success: false,
                message: err.user_message("Failed to create post."),
                post: None,
            })
        }
    }
}

/// The home feed: every post with its author, newest first. Requires an
/// authenticated session.
#[server]
pub async fn get_posts() -> Result<PostsResponse, ServerFnError> {
    use crate::auth::session_user;
    use crate::db::{get_pool, post_repo};
    use crate::error::ActionError;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    let result: Result<Vec<PostInfo>, ActionError> = async {
        let pool = get_pool().await?;
        if session_user(&session, pool).await?.is_none() {
            return Err(ActionError::Unauthenticated("fetch posts"));
        }

        let posts = post_repo::list_with_authors(pool).await?;
        Ok(posts.iter().map(|p| p.to_info()).collect())
    }
    .await;

    match result {
        Ok(posts) => {
            tracing::info!(count = posts.len(), "posts fetched");
            Ok(PostsResponse {
                success: true,
                message: None,
                posts,
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, "get_posts failed");
            Ok(PostsResponse {
                success: false,
                message: Some(err.user_message("Failed to fetch posts.")),
                posts: Vec::new(),
            })
        }
    }
}

/// One user's posts, newest first. No session required: profile pages are
/// viewable by id.
#[server]
pub async fn get_user_posts(user_id: String) -> Result<PostsResponse, ServerFnError> {
    use crate::db::{get_pool, post_repo};
    use crate::error::ActionError;

    let result: Result<Vec<PostInfo>, ActionError> = async {
        let pool = get_pool().await?;
        let author_id = uuid::Uuid::parse_str(&user_id)
            .map_err(|_| ActionError::InvalidId(user_id.clone()))?;

        let posts = post_repo::list_for_author(pool, author_id).await?;
        Ok(posts.iter().map(|p| p.to_info()).collect())
    }
    .await;

    match result {
        Ok(posts) => {
            tracing::info!(author_id = %user_id, count = posts.len(), "user posts fetched");
            Ok(PostsResponse {
                success: true,
                message: None,
                posts,
            })
        }
        Err(err) => {
            tracing::warn!(author_id = %user_id, error = %err, "get_user_posts failed");
            Ok(PostsResponse {
                success: false,
                message: Some(err.user_message("Failed to fetch user's posts.")),
                posts: Vec::new(),
            })
        }
    }
}

/// Look a user up by id for the profile page. Unknown and unparseable ids
/// both come back as `None`, which the page renders as not-found.
#[server]
pub async fn get_user_by_id(user_id: String) -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::{get_pool, user_repo};

    let Ok(user_uuid) = uuid::Uuid::parse_str(&user_id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = user_repo::find_by_id(pool, user_uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

/// Update the session user's display name and bio. An empty bio clears the
/// stored one. Concurrent edits are last-write-wins.
#[server]
pub async fn update_profile(name: String, bio: String) -> Result<UpdateProfileResponse, ServerFnError> {
    use crate::auth::session_user;
    use crate::db::{get_pool, user_repo};
    use crate::error::ActionError;
    use crate::validation;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    let result: Result<UserInfo, ActionError> = async {
        let pool = get_pool().await?;
        let user = session_user(&session, pool)
            .await?
            .ok_or(ActionError::Unauthenticated("update your profile"))?;

        validation::validate_profile(&name, &bio).map_err(ActionError::Validation)?;

        let name = name.trim();
        let bio = if bio.trim().is_empty() { None } else { Some(bio.as_str()) };

        let updated = user_repo::update_profile(pool, user.id, name, bio).await?;
        Ok(updated.to_info())
    }
    .await;

    match result {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "profile updated");
            Ok(UpdateProfileResponse {
                success: true,
                message: "Profile updated successfully!".to_string(),
                user: Some(user),
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, "update_profile failed");
            Ok(UpdateProfileResponse {
                success: false,
                message: err.user_message("Failed to update profile."),
                user: None,
            })
        }
    }
}
