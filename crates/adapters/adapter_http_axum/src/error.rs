//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eventify_domain::error::EventifyError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`EventifyError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(EventifyError);

impl<E: Into<EventifyError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            EventifyError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            EventifyError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            EventifyError::Source(err) => {
                tracing::error!(error = %err, "event source error");
                (StatusCode::BAD_GATEWAY, "event source unavailable".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
