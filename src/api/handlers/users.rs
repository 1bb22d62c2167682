//! Handlers for user registration and listing.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::user::{RegisterRequest, UserResponse};
use crate::api::extract::Path;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "username": "mluukkai", "name": "Matti Luukkainen", "password": "salainen" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: password missing or too short, invalid username or name
/// - **409 Conflict**: username already taken
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(payload.username, payload.name, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Lists all users with the blogs each of them added.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has this id.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}
