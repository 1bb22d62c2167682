//! Handler for the login endpoint.

use axum::{Json, extract::State};

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges username and password for a bearer token.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Response
///
/// ```json
/// { "token": "eyJhbGciOi...", "username": "mluukkai", "name": "Matti Luukkainen" }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized for an unknown user or a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token, user) = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
