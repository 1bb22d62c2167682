//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DatabaseCheck, HealthResponse};
use crate::state::AppState;

/// Returns service health with the database check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: database query failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "database": { "status": "ok", "users": 3, "blogs": 12 } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::new(check_database(&state).await);

    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

async fn check_database(state: &AppState) -> DatabaseCheck {
    let counts = tokio::try_join!(
        state.user_service.count_users(),
        state.blog_service.count_blogs()
    );

    match counts {
        Ok((users, blogs)) => DatabaseCheck::ok(users, blogs),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            DatabaseCheck::failed(format!("Database error: {e}"))
        }
    }
}
