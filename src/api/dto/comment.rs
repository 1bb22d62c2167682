//! DTOs for comment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::Comment;

/// Request body for creating or editing a comment.
///
/// Content is trimmed and length-checked by the comment service.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub content: String,
}

/// The author of a comment.
#[derive(Debug, Serialize)]
pub struct CommentUserItem {
    pub id: i64,
    pub username: String,
}

/// JSON representation of a comment.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub blog_id: i64,
    pub content: String,
    pub user: CommentUserItem,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            blog_id: c.blog_id,
            content: c.content,
            user: CommentUserItem {
                id: c.user_id,
                username: c.username,
            },
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
