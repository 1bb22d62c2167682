//! Comment service for discussion under blogs.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{AuthUser, Comment, NewComment};
use crate::domain::repositories::{BlogRepository, CommentRepository};
use crate::error::AppError;

/// Longest accepted comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Service for listing, adding, editing and deleting comments.
///
/// Comments can only be edited or deleted by the user who wrote them.
pub struct CommentService<C: CommentRepository + ?Sized, B: BlogRepository + ?Sized> {
    comment_repository: Arc<C>,
    blog_repository: Arc<B>,
}

impl<C: CommentRepository + ?Sized, B: BlogRepository + ?Sized> CommentService<C, B> {
    /// Creates a new comment service.
    pub fn new(comment_repository: Arc<C>, blog_repository: Arc<B>) -> Self {
        Self {
            comment_repository,
            blog_repository,
        }
    }

    /// Lists the comments of a blog, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the blog does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_comments(&self, blog_id: i64) -> Result<Vec<Comment>, AppError> {
        self.ensure_blog_exists(blog_id).await?;
        self.comment_repository.list_by_blog(blog_id).await
    }

    /// Adds a comment to a blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the content is blank or too long.
    /// Returns [`AppError::NotFound`] if the blog does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_comment(
        &self,
        blog_id: i64,
        user: &AuthUser,
        content: String,
    ) -> Result<Comment, AppError> {
        let content = validate_content(&content)?;
        self.ensure_blog_exists(blog_id).await?;

        let comment = self
            .comment_repository
            .create(NewComment {
                blog_id,
                user_id: user.id,
                content,
            })
            .await?;

        tracing::info!(comment_id = comment.id, blog_id, user_id = user.id, "Comment added");

        Ok(comment)
    }

    /// Replaces the content of a comment written by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the content is blank or too long.
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    /// Returns [`AppError::Forbidden`] if `user` did not write the comment.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_comment(
        &self,
        id: i64,
        user: &AuthUser,
        content: String,
    ) -> Result<Comment, AppError> {
        let content = validate_content(&content)?;
        let comment = self.get_comment(id).await?;
        ensure_author(&comment, user)?;

        self.comment_repository.update_content(id, &content).await
    }

    /// Deletes a comment written by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    /// Returns [`AppError::Forbidden`] if `user` did not write the comment.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_comment(&self, id: i64, user: &AuthUser) -> Result<(), AppError> {
        let comment = self.get_comment(id).await?;
        ensure_author(&comment, user)?;

        if !self.comment_repository.delete(id).await? {
            return Err(AppError::not_found("Comment not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn get_comment(&self, id: i64) -> Result<Comment, AppError> {
        self.comment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found", json!({ "id": id })))
    }

    async fn ensure_blog_exists(&self, blog_id: i64) -> Result<(), AppError> {
        if self.blog_repository.find_by_id(blog_id).await?.is_none() {
            return Err(AppError::not_found(
                "Blog not found",
                json!({ "id": blog_id }),
            ));
        }

        Ok(())
    }
}

fn ensure_author(comment: &Comment, user: &AuthUser) -> Result<(), AppError> {
    if !comment.is_owned_by(user.id) {
        tracing::warn!(
            comment_id = comment.id,
            user_id = user.id,
            "Rejected change to comment by non-author"
        );
        return Err(AppError::forbidden(
            "Only the author of a comment can change it",
            json!({ "id": comment.id }),
        ));
    }

    Ok(())
}

fn validate_content(content: &str) -> Result<String, AppError> {
    let content = content.trim();

    if content.is_empty() {
        return Err(AppError::bad_request(
            "content missing",
            json!({ "field": "content" }),
        ));
    }

    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(AppError::bad_request(
            "content too long",
            json!({ "field": "content", "max_length": MAX_COMMENT_LENGTH }),
        ));
    }

    Ok(content.to_string())
}
