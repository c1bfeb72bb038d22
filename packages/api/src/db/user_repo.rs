//! User queries.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;

/// Look a user up by primary key.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Look a user up by email. Emails are stored lowercased.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Insert a new account and return the stored row.
pub async fn insert(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Persist a profile edit. An absent bio is stored as NULL.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    bio: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        "UPDATE users SET name = $2, bio = $3, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(bio)
    .fetch_one(pool)
    .await
}
