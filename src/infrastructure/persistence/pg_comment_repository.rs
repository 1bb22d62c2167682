//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    blog_id: i64,
    user_id: i64,
    username: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            blog_id: r.blog_id,
            user_id: r.user_id,
            username: r.username,
            content: r.content,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for blog comments.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            WITH c AS (
                INSERT INTO comments (blog_id, user_id, content)
                VALUES ($1, $2, $3)
                RETURNING id, blog_id, user_id, content, created_at, updated_at
            )
            SELECT c.id, c.blog_id, c.user_id, u.username, c.content, c.created_at, c.updated_at
            FROM c
            JOIN users u ON u.id = c.user_id
            "#,
        )
        .bind(new_comment.blog_id)
        .bind(new_comment.user_id)
        .bind(&new_comment.content)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.blog_id, c.user_id, u.username, c.content, c.created_at, c.updated_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn list_by_blog(&self, blog_id: i64) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.blog_id, c.user_id, u.username, c.content, c.created_at, c.updated_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.blog_id = $1
            ORDER BY c.created_at, c.id
            "#,
        )
        .bind(blog_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn update_content(&self, id: i64, content: &str) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            WITH c AS (
                UPDATE comments
                SET content = $2, updated_at = NOW()
                WHERE id = $1
                RETURNING id, blog_id, user_id, content, created_at, updated_at
            )
            SELECT c.id, c.blog_id, c.user_id, u.username, c.content, c.created_at, c.updated_at
            FROM c
            JOIN users u ON u.id = c.user_id
            "#,
        )
        .bind(id)
        .bind(content)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Comment::from)
            .ok_or_else(|| AppError::not_found("Comment not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
