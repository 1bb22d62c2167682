//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User accounts
//! - [`BlogRepository`] - Blog entries
//! - [`CommentRepository`] - Comments on blogs
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod blog_repository;
pub mod comment_repository;
pub mod user_repository;

pub use blog_repository::BlogRepository;
pub use comment_repository::CommentRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
