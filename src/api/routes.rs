//! API route configuration.
//!
//! Reads are public. Writes require Bearer token authentication via
//! [`crate::api::middleware::auth`], except registration and login.
//! [`crate::routes::app_router`] applies authentication and rate limits to
//! these groups.

use crate::api::handlers::{
    blog_stats_handler, create_blog_handler, create_comment_handler, delete_blog_handler,
    delete_comment_handler, get_blog_handler, get_user_handler, like_blog_handler,
    list_blogs_handler, list_comments_handler, list_users_handler, login_handler,
    register_handler, update_blog_handler, update_comment_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Read-only routes open to everyone.
///
/// # Endpoints
///
/// - `GET /users`                - List users with their blogs
/// - `GET /users/{id}`           - Single user
/// - `GET /blogs`                - List blogs
/// - `GET /blogs/stats`          - Like and authorship statistics
/// - `GET /blogs/{id}`           - Single blog
/// - `GET /blogs/{id}/comments`  - Comments of a blog
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/blogs", get(list_blogs_handler))
        .route("/blogs/stats", get(blog_stats_handler))
        .route("/blogs/{id}", get(get_blog_handler))
        .route("/blogs/{id}/comments", get(list_comments_handler))
}

/// Unauthenticated routes that handle credentials.
///
/// # Endpoints
///
/// - `POST /users`  - Register
/// - `POST /login`  - Exchange credentials for a token
pub fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register_handler))
        .route("/login", post(login_handler))
}

/// Routes that require a valid Bearer token.
///
/// # Endpoints
///
/// - `POST   /blogs`                - Add a blog
/// - `PUT    /blogs/{id}`           - Update a blog (owner only)
/// - `DELETE /blogs/{id}`           - Delete a blog (owner only)
/// - `POST   /blogs/{id}/likes`     - Like a blog
/// - `POST   /blogs/{id}/comments`  - Comment on a blog
/// - `PUT    /comments/{id}`        - Edit a comment (author only)
/// - `DELETE /comments/{id}`        - Delete a comment (author only)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(create_blog_handler))
        .route(
            "/blogs/{id}",
            put(update_blog_handler).delete(delete_blog_handler),
        )
        .route("/blogs/{id}/likes", post(like_blog_handler))
        .route("/blogs/{id}/comments", post(create_comment_handler))
        .route(
            "/comments/{id}",
            put(update_comment_handler).delete(delete_comment_handler),
        )
}
