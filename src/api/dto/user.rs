//! DTOs for user registration and listing.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::UserWithBlogs;
use crate::domain::entities::{Blog, User};

/// Request body for `POST /api/users`.
///
/// `password` is optional at the JSON level so a missing password produces
/// the "password missing" validation error instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "name is too long"))]
    pub name: String,

    pub password: Option<String>,
}

/// Blog summary embedded in a user listing.
#[derive(Debug, Serialize)]
pub struct UserBlogItem {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub likes: i64,
}

impl From<Blog> for UserBlogItem {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            url: b.url,
            likes: b.likes,
        }
    }
}

/// Public representation of a user. Never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub blogs: Vec<UserBlogItem>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            name: u.name,
            blogs: Vec::new(),
        }
    }
}

impl From<UserWithBlogs> for UserResponse {
    fn from(entry: UserWithBlogs) -> Self {
        Self {
            blogs: entry.blogs.into_iter().map(UserBlogItem::from).collect(),
            ..UserResponse::from(entry.user)
        }
    }
}
