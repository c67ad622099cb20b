//! Event-source-specific error type wrapping reqwest errors.

use eventify_domain::error::EventifyError;

/// Errors originating from the remote event API.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Connecting, sending or reading the response failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status other than 404.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The response body is not a list of events.
    #[error("invalid event payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL {0:?}, expected http:// or https://")]
    InvalidBaseUrl(String),
}

impl From<SourceError> for EventifyError {
    fn from(err: SourceError) -> Self {
        Self::Source(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_into_source_error() {
        let err: EventifyError = SourceError::Status(503).into();
        assert!(matches!(err, EventifyError::Source(_)));
        assert_eq!(err.to_string(), "event source error: HTTP error! status: 503");
    }
}
