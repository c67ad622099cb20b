//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EventifyError`] at port boundaries.

/// Base error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum EventifyError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The remote event source (or another IO collaborator) failed.
    #[error("event source error: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected by the domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing path")]
    MissingPath,

    #[error("path {0:?} does not identify an event page")]
    InvalidPath(String),

    #[error("invalid event id {0:?}")]
    InvalidEventId(String),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("date range needs both a start and an end")]
    IncompleteDateRange,

    #[error("date range starts after it ends")]
    InvertedDateRange,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Event",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Event 42 not found");
    }

    #[test]
    fn should_convert_validation_error_into_base_error() {
        let err: EventifyError = ValidationError::MissingPath.into();
        assert!(matches!(
            err,
            EventifyError::Validation(ValidationError::MissingPath)
        ));
    }

    #[test]
    fn should_include_source_message_in_display() {
        let err = EventifyError::Source("connection refused".into());
        assert_eq!(err.to_string(), "event source error: connection refused");
    }
}
