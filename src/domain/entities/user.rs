//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `password_hash` holds a bcrypt hash and must never leave the service layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        username: String,
        name: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            name,
            password_hash,
            created_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password_hash: String,
}

/// Identity of the caller, resolved from a verified bearer token.
///
/// Inserted into request extensions by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}
