//! Request spans and access logging.
//!
//! Every request runs inside a `request` span with the HTTP method, the
//! matched route template (`/api/blogs/{id}`, not `/api/blogs/7`) and a
//! `user_id` field. The field stays empty until
//! [`auth::layer`](super::auth::layer) resolves a bearer token and calls
//! [`record_user`].
//!
//! ```text
//! INFO request{method=PUT route=/api/blogs/{id} user_id=3}: finished processing request latency=9 ms status=200
//! ```

use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Builds the `request` span for each incoming request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            route = route_of(request),
            user_id = tracing::field::Empty,
        )
    }
}

/// Route template the request matched, or the raw path when nothing matched.
fn route_of<B>(request: &Request<B>) -> &str {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or_else(|| request.uri().path())
}

/// Creates the tracing layer. Responses log at `INFO`, server errors at `ERROR`.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// Records the authenticated caller on the current request span.
pub fn record_user(user_id: i64) {
    Span::current().record("user_id", user_id);
}
