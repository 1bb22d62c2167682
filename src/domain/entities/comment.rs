//! Comment entity attached to a blog.

use chrono::{DateTime, Utc};

/// A comment left on a blog, with the commenter's username joined in.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub blog_id: i64,
    pub user_id: i64,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Returns true if the given user wrote this comment.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub blog_id: i64,
    pub user_id: i64,
    pub content: String,
}
