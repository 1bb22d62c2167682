//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, ownership checks and aggregation. Services consume repository
//! traits and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Login and bearer token verification
//! - [`services::user_service::UserService`] - Registration and user listings
//! - [`services::blog_service::BlogService`] - Blog CRUD, likes and statistics
//! - [`services::comment_service::CommentService`] - Comments on blogs

pub mod services;
