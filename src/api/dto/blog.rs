//! DTOs for blog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::BlogStats;
use crate::domain::aggregator::{AuthorTally, BlogRecord};
use crate::domain::entities::{Blog, BlogPatch};

/// Request body for `POST /api/blogs`.
///
/// `title` and `url` are optional at the JSON level so that their absence
/// yields a 400 validation error rather than a 422 deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(required(message = "title missing"), length(min = 1, max = 500))]
    pub title: Option<String>,

    #[validate(length(max = 255))]
    pub author: Option<String>,

    #[validate(required(message = "url missing"), length(min = 1, max = 2048))]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// Request body for `PUT /api/blogs/{id}`.
///
/// All fields are optional; only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,

    #[validate(length(max = 255))]
    pub author: Option<String>,

    #[validate(length(min = 1, max = 2048))]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

impl From<UpdateBlogRequest> for BlogPatch {
    fn from(r: UpdateBlogRequest) -> Self {
        BlogPatch {
            title: r.title,
            author: r.author,
            url: r.url,
            likes: r.likes,
        }
    }
}

/// The user who added a blog, as shown in blog listings.
#[derive(Debug, Serialize)]
pub struct BlogUserItem {
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// JSON representation of a blog.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: BlogUserItem,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            url: b.url,
            likes: b.likes,
            user: BlogUserItem {
                id: b.owner.id,
                username: b.owner.username,
                name: b.owner.name,
            },
            created_at: b.created_at,
        }
    }
}

/// Response for `GET /api/blogs/stats`.
///
/// Each "best of" field is `null` when there are no blogs.
#[derive(Debug, Serialize)]
pub struct BlogStatsResponse {
    pub total_likes: u64,
    pub favorite_blog: Option<BlogRecord>,
    pub most_blogs: Option<AuthorTally>,
    pub most_likes: Option<AuthorTally>,
}

impl From<BlogStats> for BlogStatsResponse {
    fn from(s: BlogStats) -> Self {
        Self {
            total_likes: s.total_likes,
            favorite_blog: s.favorite_blog,
            most_blogs: s.most_blogs,
            most_likes: s.most_likes,
        }
    }
}
