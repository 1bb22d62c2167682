//! Repository trait for blog entries.

use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blogs.
///
/// Every returned [`Blog`] carries its owner joined in.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_blog.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Creates a new blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError>;

    /// Finds a blog by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError>;

    /// Lists all blogs in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Blog>, AppError>;

    /// Partially updates a blog.
    ///
    /// Only fields present in [`BlogPatch`] are modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError>;

    /// Atomically adds one like.
    ///
    /// Returns `Ok(None)` if no blog has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_likes(&self, id: i64) -> Result<Option<Blog>, AppError>;

    /// Deletes a blog and its comments.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored blogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
