//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account
//! - [`Blog`] - A blog post entry owned by a user
//! - [`Comment`] - A comment left on a blog by a user
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewUser`, `NewBlog`, `NewComment` - For creating new records
//! - `BlogPatch` - For partial updates

pub mod blog;
pub mod comment;
pub mod user;

pub use blog::{Blog, BlogOwner, BlogPatch, NewBlog};
pub use comment::{Comment, NewComment};
pub use user::{AuthUser, NewUser, User};
