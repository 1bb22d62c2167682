//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod blogs;
pub mod comments;
pub mod health;
pub mod login;
pub mod users;

pub use blogs::{
    blog_stats_handler, create_blog_handler, delete_blog_handler, get_blog_handler,
    like_blog_handler, list_blogs_handler, update_blog_handler,
};
pub use comments::{
    create_comment_handler, delete_comment_handler, list_comments_handler, update_comment_handler,
};
pub use health::health_handler;
pub use login::login_handler;
pub use users::{get_user_handler, list_users_handler, register_handler};
