//! PostgreSQL implementation of blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, BlogOwner, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use serde_json::json;

/// Columns selected for every blog, with the owner joined in.
///
/// Expects the blog row aliased as `b` and the owner as `u`.
const BLOG_COLUMNS: &str = r#"
    b.id, b.title, b.author, b.url, b.likes, b.created_at,
    u.id AS owner_id, u.username AS owner_username, u.name AS owner_name
"#;

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    author: String,
    url: String,
    likes: i64,
    created_at: DateTime<Utc>,
    owner_id: i64,
    owner_username: String,
    owner_name: String,
}

impl From<BlogRow> for Blog {
    fn from(r: BlogRow) -> Self {
        Blog::new(
            r.id,
            r.title,
            r.author,
            r.url,
            r.likes,
            BlogOwner {
                id: r.owner_id,
                username: r.owner_username,
                name: r.owner_name,
            },
            r.created_at,
        )
    }
}

/// PostgreSQL repository for blog storage and retrieval.
///
/// Writes use a `WITH ... RETURNING` CTE so the owner join happens in the
/// same round trip. Deleting a blog cascades to its comments.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let sql = format!(
            r#"
            WITH b AS (
                INSERT INTO blogs (title, author, url, likes, user_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, title, author, url, likes, user_id, created_at
            )
            SELECT {BLOG_COLUMNS}
            FROM b
            JOIN users u ON u.id = b.user_id
            "#
        );

        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(&new_blog.title)
            .bind(&new_blog.author)
            .bind(&new_blog.url)
            .bind(new_blog.likes)
            .bind(new_blog.user_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let sql = format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs b
            JOIN users u ON u.id = b.user_id
            WHERE b.id = $1
            "#
        );

        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Blog::from))
    }

    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        let sql = format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs b
            JOIN users u ON u.id = b.user_id
            ORDER BY b.id
            "#
        );

        let rows = sqlx::query_as::<_, BlogRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError> {
        let sql = format!(
            r#"
            WITH b AS (
                UPDATE blogs
                SET title  = COALESCE($2, title),
                    author = COALESCE($3, author),
                    url    = COALESCE($4, url),
                    likes  = COALESCE($5, likes)
                WHERE id = $1
                RETURNING id, title, author, url, likes, user_id, created_at
            )
            SELECT {BLOG_COLUMNS}
            FROM b
            JOIN users u ON u.id = b.user_id
            "#
        );

        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(id)
            .bind(patch.title)
            .bind(patch.author)
            .bind(patch.url)
            .bind(patch.likes)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Blog::from)
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    async fn increment_likes(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let sql = format!(
            r#"
            WITH b AS (
                UPDATE blogs
                SET likes = likes + 1
                WHERE id = $1
                RETURNING id, title, author, url, likes, user_id, created_at
            )
            SELECT {BLOG_COLUMNS}
            FROM b
            JOIN users u ON u.id = b.user_id
            "#
        );

        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Blog::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
