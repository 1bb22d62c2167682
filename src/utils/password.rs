//! Password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool instead of stalling the async executor.

use serde_json::json;

use crate::error::AppError;

/// Lowest cost factor bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost factor bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Hashes a plaintext password with the given bcrypt cost.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails or the blocking task panics.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            AppError::internal(
                "Password hashing task failed",
                json!({ "reason": e.to_string() }),
            )
        })?
        .map_err(|e| {
            AppError::internal("Password hashing failed", json!({ "reason": e.to_string() }))
        })
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch rather than an error so the
/// caller answers with the same 401 as for a wrong password.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the blocking task panics.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();

    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| {
            AppError::internal(
                "Password verification task failed",
                json!({ "reason": e.to_string() }),
            )
        })?;

    match verified {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            Ok(false)
        }
    }
}
