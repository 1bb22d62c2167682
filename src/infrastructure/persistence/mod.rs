//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters and `FromRow` row mapping.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User accounts
//! - [`PgBlogRepository`] - Blog entries with their owners joined in
//! - [`PgCommentRepository`] - Comments with commenter usernames joined in

pub mod pg_blog_repository;
pub mod pg_comment_repository;
pub mod pg_user_repository;

pub use pg_blog_repository::PgBlogRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_user_repository::PgUserRepository;
