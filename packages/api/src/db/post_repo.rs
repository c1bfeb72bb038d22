//! Post queries. Feed reads join the author and order newest first; the
//! ordering lives in SQL so every caller gets the same contract.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Post, PostWithAuthor};

/// Insert a post and return the stored row. The id and timestamp are
/// assigned by the database.
pub async fn insert(pool: &PgPool, author_id: Uuid, content: &str) -> Result<Post, sqlx::Error> {
    sqlx::query_as("INSERT INTO posts (author_id, content) VALUES ($1, $2) RETURNING *")
        .bind(author_id)
        .bind(content)
        .fetch_one(pool)
        .await
}

/// Every post with its author attached, newest first.
pub async fn list_with_authors(pool: &PgPool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    sqlx::query_as(
        "SELECT p.id, p.content, p.author_id, u.name AS author_name, p.created_at
         FROM posts p
         JOIN users u ON u.id = p.author_id
         ORDER BY p.created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// One user's posts with the author attached, newest first.
pub async fn list_for_author(
    pool: &PgPool,
    author_id: Uuid,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    sqlx::query_as(
        "SELECT p.id, p.content, p.author_id, u.name AS author_name, p.created_at
         FROM posts p
         JOIN users u ON u.id = p.author_id
         WHERE p.author_id = $1
         ORDER BY p.created_at DESC",
    )
    .bind(author_id)
    .fetch_all(pool)
    .await
}
