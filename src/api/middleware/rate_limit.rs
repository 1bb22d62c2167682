//! Per-client rate limiting for the blog API.
//!
//! Clients are keyed by peer IP address, so the router must be served with
//! `into_make_service_with_connect_info::<SocketAddr>()`. Bucket sizes come
//! from [`RateLimitConfig`]. Rejected requests get the usual JSON error body
//! with status 429 and a `Retry-After` header.

use anyhow::{Context, Result};
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use serde_json::json;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer, governor::GovernorConfigBuilder,
    key_extractor::PeerIpKeyExtractor,
};

use crate::config::RateLimitConfig;
use crate::error::AppError;

/// Token bucket layer keyed by client IP.
pub type RateLimitLayer = GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body>;

/// Builds a rate limiting layer from `limit`.
///
/// Clones of the returned layer share one set of buckets.
///
/// # Errors
///
/// Returns an error if the period or burst size is zero.
pub fn layer(limit: &RateLimitConfig) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(limit.period_ms)
        .burst_size(limit.burst_size)
        .finish()
        .context("Rate limit period and burst size must be greater than 0")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)).error_handler(rejection_response))
}

fn rejection_response(error: GovernorError) -> Response<Body> {
    match error {
        GovernorError::TooManyRequests { wait_time, .. } => {
            tracing::warn!(wait_time, "Rate limit exceeded");
            AppError::too_many_requests(
                "Too many requests",
                json!({ "retry_after_seconds": wait_time }),
            )
            .into_response()
        }
        other => {
            tracing::error!(error = %other, "Rate limiter failed");
            AppError::internal("Rate limiter failed", json!({})).into_response()
        }
    }
}
