//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod countdown;
#[allow(clippy::missing_errors_doc)]
pub mod events;
pub mod filters;
#[allow(clippy::missing_errors_doc)]
pub mod freshness;
pub mod revalidate;

use axum::Router;
use axum::routing::get;

use eventify_app::ports::{Clock, EventSource};
use eventify_domain::error::ValidationError;
use eventify_domain::id::EventId;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, C>() -> Router<AppState<S, C>>
where
    S: EventSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        // Events
        .route("/events", get(events::list::<S, C>))
        .route("/events/{id}", get(events::get::<S, C>))
        .route("/events/{id}/countdown", get(countdown::stream::<S, C>))
        .route("/events/{id}/freshness", get(freshness::check::<S, C>))
        // Selector options
        .route("/filters", get(filters::options))
        // On-demand regeneration
        .route("/revalidate", get(revalidate::handle::<S, C>))
}

/// Parse an event id taken from a path segment.
fn parse_id(raw: &str) -> Result<EventId, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidEventId(raw.to_string()))
}
