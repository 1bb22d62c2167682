//! User registration and listing service.

use regex::Regex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::domain::entities::{Blog, NewUser, User};
use crate::domain::repositories::{BlogRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Usernames start with a letter, then letters, digits or underscores.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{2,29}$").unwrap());

/// Passwords of this many characters or fewer are rejected.
const MIN_PASSWORD_EXCLUSIVE: usize = 3;

/// A user together with the blogs they added.
#[derive(Debug, Clone)]
pub struct UserWithBlogs {
    pub user: User,
    pub blogs: Vec<Blog>,
}

/// Service for registering and listing users.
pub struct UserService<U: UserRepository + ?Sized, B: BlogRepository + ?Sized> {
    user_repository: Arc<U>,
    blog_repository: Arc<B>,
    bcrypt_cost: u32,
}

impl<U: UserRepository + ?Sized, B: BlogRepository + ?Sized> UserService<U, B> {
    /// Creates a new user service.
    ///
    /// `bcrypt_cost` is the work factor used when hashing new passwords.
    pub fn new(user_repository: Arc<U>, blog_repository: Arc<B>, bcrypt_cost: u32) -> Self {
        Self {
            user_repository,
            blog_repository,
            bcrypt_cost,
        }
    }

    /// Registers a new user.
    ///
    /// # Validation
    ///
    /// - Password must be present and longer than 3 characters
    /// - Username: 3-30 characters, letters, digits and underscores, starting with a letter
    /// - Name must not be blank
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(
        &self,
        username: String,
        name: String,
        password: Option<String>,
    ) -> Result<User, AppError> {
        let Some(password) = password else {
            return Err(AppError::bad_request(
                "password missing",
                json!({ "field": "password" }),
            ));
        };

        if password.chars().count() <= MIN_PASSWORD_EXCLUSIVE {
            return Err(AppError::bad_request(
                "password too short",
                json!({ "field": "password", "min_length": MIN_PASSWORD_EXCLUSIVE + 1 }),
            ));
        }

        self.validate_username(&username)?;

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "name missing",
                json!({ "field": "name" }),
            ));
        }

        if self
            .user_repository
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Username already taken",
                json!({ "username": username }),
            ));
        }

        let password_hash = hash_password(&password, self.bcrypt_cost).await?;

        let user = self
            .user_repository
            .create(NewUser {
                username,
                name,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Lists every user with the blogs they added.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<UserWithBlogs>, AppError> {
        let users = self.user_repository.list().await?;
        let blogs = self.blog_repository.list().await?;

        let mut by_owner: HashMap<i64, Vec<Blog>> = HashMap::new();
        for blog in blogs {
            by_owner.entry(blog.owner.id).or_default().push(blog);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let blogs = by_owner.remove(&user.id).unwrap_or_default();
                UserWithBlogs { user, blogs }
            })
            .collect())
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Counts registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.user_repository.count().await
    }

    fn validate_username(&self, username: &str) -> Result<(), AppError> {
        if !USERNAME_REGEX.is_match(username) {
            return Err(AppError::bad_request(
                "Invalid username",
                json!({
                    "username": username,
                    "reason": "3-30 characters: letters, digits or underscores, starting with a letter"
                }),
            ));
        }

        Ok(())
    }
}
