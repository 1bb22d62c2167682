//! Authentication service: login and bearer token verification.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::entities::{AuthUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;
use serde_json::json;

/// JWT claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    /// Issued at (Unix timestamp).
    pub iat: u64,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
}

/// Service for logging users in and authenticating API requests.
///
/// Tokens are HS256 JWTs signed with `jwt_secret`. A token is only accepted
/// while its signature and expiry are valid and the user it names still exists.
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    jwt_secret: String,
    token_ttl_seconds: i64,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository used for login and token subject lookup
    /// - `jwt_secret` - HMAC key used to sign and verify tokens
    /// - `token_ttl_seconds` - lifetime of issued tokens
    pub fn new(repository: Arc<R>, jwt_secret: String, token_ttl_seconds: i64) -> Self {
        Self {
            repository,
            jwt_secret,
            token_ttl_seconds,
        }
    }

    /// Verifies credentials and issues a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the username is unknown or the
    /// password does not match. Both cases share one message.
    ///
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let invalid = || {
            AppError::unauthorized(
                "Invalid username or password",
                json!({ "reason": "invalid_credentials" }),
            )
        };

        let Some(user) = self.repository.find_by_username(username).await? else {
            tracing::warn!(username, "Login attempt for unknown user");
            return Err(invalid());
        };

        if !verify_password(password, &user.password_hash).await? {
            tracing::warn!(username, "Login attempt with wrong password");
            return Err(invalid());
        }

        let token = self.issue_token(&user)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok((token, user))
    }

    /// Resolves a raw bearer token to the calling user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - The token is malformed, badly signed, or expired
    /// - The subject is not a user id
    /// - The user no longer exists
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        let claims = self.verify_token(token)?;

        let user_id: i64 = claims.sub.parse().map_err(|_| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid token subject" }))
        })?;

        let user = self.repository.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "User no longer exists" }))
        })?;

        Ok(AuthUser {
            id: user.id,
            username: user.username,
        })
    }

    /// Signs a token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry is not representable or
    /// signing fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let exp = now
            .checked_add(self.token_ttl_seconds)
            .and_then(|exp| u64::try_from(exp).ok())
            .ok_or_else(|| {
                AppError::internal(
                    "Failed to sign token",
                    json!({ "reason": "Token expiry out of range" }),
                )
            })?;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: u64::try_from(now).unwrap_or(0),
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::internal("Failed to sign token", json!({ "reason": e.to_string() })))
    }

    /// Checks signature and expiry and returns the decoded claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for any invalid token.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid or expired token" }))
        })
    }
}
