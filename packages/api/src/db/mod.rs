//! # Database module — PostgreSQL pool and queries
//!
//! The shared connection pool plus the two query modules used by every server
//! function in this crate. Everything here is gated behind
//! `#[cfg(feature = "server")]` so that client (WASM) builds never pull in
//! SQLx or Tokio networking code.
//!
//! ## Design
//!
//! The pool is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens a pool with up
//! to 5 connections, and caches the result for all subsequent callers.
//!
//! Queries live in [`post_repo`] and [`user_repo`] as free functions over
//! `&PgPool`, returning `Result<_, sqlx::Error>` and leaving message policy
//! to the server functions that call them.

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
pub mod post_repo;
#[cfg(feature = "server")]
pub mod user_repo;

#[cfg(feature = "server")]
pub use pool::get_pool;
