//! Request extractors whose rejections use the API error body.

use axum::extract::FromRequestParts;
use axum::extract::rejection::PathRejection;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Drop-in for [`axum::extract::Path`] that rejects with [`AppError`].
///
/// `GET /api/blogs/abc` answers `400` with
/// `{"error": {"code": "validation_error", ...}}` instead of plain text.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_error(rejection)),
        }
    }
}

fn path_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(e) => AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": e.body_text() }),
        ),
        other => {
            tracing::error!(error = %other, "Path extraction failed");
            AppError::internal("Invalid route parameters", json!({}))
        }
    }
}
