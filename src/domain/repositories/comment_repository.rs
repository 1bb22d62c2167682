//! Repository trait for blog comments.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing comments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Creates a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Finds a comment by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError>;

    /// Lists the comments of a blog, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_blog(&self, blog_id: i64) -> Result<Vec<Comment>, AppError>;

    /// Replaces the content of a comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no comment has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_content(&self, id: i64, content: &str) -> Result<Comment, AppError>;

    /// Deletes a comment.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
