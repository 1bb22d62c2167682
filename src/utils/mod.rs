//! Utility functions shared across layers.
//!
//! - [`password`] - bcrypt password hashing on the blocking thread pool

pub mod password;
