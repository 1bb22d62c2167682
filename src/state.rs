//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, BlogService, CommentService, UserService};
use crate::config::SecurityConfig;
use crate::domain::repositories::{BlogRepository, CommentRepository, UserRepository};

/// Services shared by all request handlers.
///
/// Repositories are trait objects: PostgreSQL in the server, in-memory
/// stores in the HTTP tests.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository, dyn BlogRepository>>,
    pub blog_service: Arc<BlogService<dyn BlogRepository>>,
    pub comment_service: Arc<CommentService<dyn CommentRepository, dyn BlogRepository>>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        comments: Arc<dyn CommentRepository>,
        security: &SecurityConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                users.clone(),
                security.jwt_secret.clone(),
                security.token_ttl_seconds,
            )),
            user_service: Arc::new(UserService::new(
                users,
                blogs.clone(),
                security.bcrypt_cost,
            )),
            blog_service: Arc::new(BlogService::new(blogs.clone())),
            comment_service: Arc::new(CommentService::new(comments, blogs)),
        }
    }
}
