//! Blog entity representing a single post entry.

use chrono::{DateTime, Utc};

/// Public identity of the user who added a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogOwner {
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// A blog post entry with its owner joined in.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub owner: BlogOwner,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Creates a new Blog instance.
    pub fn new(
        id: i64,
        title: String,
        author: String,
        url: String,
        likes: i64,
        owner: BlogOwner,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            url,
            likes,
            owner,
            created_at,
        }
    }

    /// Returns true if the given user added this blog.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner.id == user_id
    }
}

/// Input data for creating a new blog.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user_id: i64,
}

/// Partial update for an existing blog.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl BlogPatch {
    /// Returns true if applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none() && self.likes.is_none()
    }
}
