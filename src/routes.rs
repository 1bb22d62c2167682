//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database (public)
//! - `/api/*`            - REST API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Request spans with route template and caller
//! - **Rate limiting** - Per-IP token buckets: one for reads, one shared by
//!   credentials and authenticated writes
//! - **Authentication** - Bearer token on write routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::config::RateLimitConfig;
use crate::state::AppState;
use anyhow::Result;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The result must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the rate limiter
/// can see client addresses.
///
/// # Errors
///
/// Returns an error if a rate limit has a zero period or burst size.
pub fn app_router(
    state: AppState,
    public_limit: &RateLimitConfig,
    write_limit: &RateLimitConfig,
) -> Result<NormalizePath<Router>> {
    let write_layer = rate_limit::layer(write_limit)?;

    let public = api::routes::public_routes().layer(rate_limit::layer(public_limit)?);

    let credentials = api::routes::credential_routes().layer(write_layer.clone());

    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(write_layer);

    let api_router = Router::new()
        .merge(public)
        .merge(credentials)
        .merge(protected);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
