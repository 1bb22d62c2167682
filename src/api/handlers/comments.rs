//! Handlers for comment endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::comment::{CommentRequest, CommentResponse};
use crate::api::extract::Path;
use crate::domain::entities::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the comments of a blog, oldest first.
///
/// # Endpoint
///
/// `GET /api/blogs/{id}/comments`
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(blog_id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let comments = state.comment_service.list_comments(blog_id).await?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

/// Adds a comment to a blog.
///
/// # Endpoint
///
/// `POST /api/blogs/{id}/comments` (Bearer token required)
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(blog_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let comment = state
        .comment_service
        .add_comment(blog_id, &user, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// Replaces the content of a comment. Only its author may do this.
///
/// # Endpoint
///
/// `PUT /api/comments/{id}` (Bearer token required)
pub async fn update_comment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = state
        .comment_service
        .update_comment(id, &user, payload.content)
        .await?;

    Ok(Json(CommentResponse::from(comment)))
}

/// Deletes a comment. Only its author may do this.
///
/// # Endpoint
///
/// `DELETE /api/comments/{id}` (Bearer token required)
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.comment_service.delete_comment(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
