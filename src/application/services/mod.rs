//! Business logic services for the application layer.

pub mod auth_service;
pub mod blog_service;
pub mod comment_service;
pub mod user_service;

pub use auth_service::{AuthService, Claims};
pub use blog_service::{BlogService, BlogStats};
pub use comment_service::CommentService;
pub use user_service::{UserService, UserWithBlogs};
