//! # Error taxonomy for server-side operations
//!
//! Server functions in this crate never surface internal failures to the
//! caller directly; each operation catches [`ActionError`] and maps it onto
//! its tagged response. [`ActionError::user_message`] decides what the caller
//! may see: authentication and validation failures explain themselves, while
//! database and session errors collapse to the operation's generic failure
//! line and are only logged server-side.

use thiserror::Error;

use crate::validation::{join_messages, FieldError};

/// What went wrong inside a server function.
#[derive(Debug, Error)]
pub enum ActionError {
    /// No signed-in user for an operation that requires one.
    #[error("You must be logged in to {0}.")]
    Unauthenticated(&'static str),
    /// Input failed the shared validation rules; every violation is kept.
    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldError>),
    /// An id that does not parse as a UUID.
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl ActionError {
    /// Message safe to show the caller. Infrastructure failures collapse to
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ActionError::Unauthenticated(_) | ActionError::Validation(_) => self.to_string(),
            ActionError::InvalidId(_) | ActionError::Database(_) | ActionError::Session(_) => {
                fallback.to_string()
            }
        }
    }
}
