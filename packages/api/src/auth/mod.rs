//! Password authentication and session management.

mod session;

#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::session_user;
pub use session::SESSION_USER_ID_KEY;
