//! Handlers for blog endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::blog::{
    BlogResponse, BlogStatsResponse, CreateBlogRequest, UpdateBlogRequest,
};
use crate::api::extract::Path;
use crate::domain::entities::{AuthUser, BlogPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all blogs with the user who added each.
///
/// # Endpoint
///
/// `GET /api/blogs`
pub async fn list_blogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Returns like and authorship statistics over the whole list.
///
/// # Endpoint
///
/// `GET /api/blogs/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_likes": 36,
///   "favorite_blog": { "title": "Canonical string reduction", "author": "Edsger W. Dijkstra", "url": "...", "likes": 12 },
///   "most_blogs": { "Robert C. Martin": 3 },
///   "most_likes": { "Edsger W. Dijkstra": 17 }
/// }
/// ```
///
/// The three "best of" fields are `null` for an empty list.
pub async fn blog_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<BlogStatsResponse>, AppError> {
    let stats = state.blog_service.stats().await?;

    Ok(Json(BlogStatsResponse::from(stats)))
}

/// Returns a single blog.
///
/// # Endpoint
///
/// `GET /api/blogs/{id}`
pub async fn get_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = state.blog_service.get_blog(id).await?;

    Ok(Json(BlogResponse::from(blog)))
}

/// Adds a blog owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/blogs` (Bearer token required)
///
/// # Errors
///
/// - **400 Bad Request**: title or url missing, negative likes
/// - **401 Unauthorized**: missing or invalid token
pub async fn create_blog_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    payload.validate()?;

    let blog = state
        .blog_service
        .create_blog(
            &user,
            payload.title.unwrap_or_default(),
            payload.author.unwrap_or_default(),
            payload.url.unwrap_or_default(),
            payload.likes,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BlogResponse::from(blog))))
}

/// Partially updates a blog. Only the owner may do this.
///
/// # Endpoint
///
/// `PUT /api/blogs/{id}` (Bearer token required)
///
/// # Errors
///
/// - **400 Bad Request**: invalid field values
/// - **403 Forbidden**: caller does not own the blog
/// - **404 Not Found**: no such blog
pub async fn update_blog_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    payload.validate()?;

    let blog = state
        .blog_service
        .update_blog(id, &user, BlogPatch::from(payload))
        .await?;

    Ok(Json(BlogResponse::from(blog)))
}

/// Adds one like to a blog.
///
/// # Endpoint
///
/// `POST /api/blogs/{id}/likes` (Bearer token required)
pub async fn like_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = state.blog_service.like_blog(id).await?;

    Ok(Json(BlogResponse::from(blog)))
}

/// Deletes a blog and its comments. Only the owner may do this.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}` (Bearer token required)
///
/// # Response Codes
///
/// - **204 No Content**: deleted
/// - **403 Forbidden**: caller does not own the blog
/// - **404 Not Found**: no such blog
pub async fn delete_blog_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.blog_service.delete_blog(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
