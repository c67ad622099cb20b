//! Event service — listing and lookup use-cases over the event source.

use serde::Serialize;

use eventify_domain::error::{EventifyError, NotFoundError};
use eventify_domain::event::Event;
use eventify_domain::filter::{EventQuery, FilterState};
use eventify_domain::id::EventId;

use crate::ports::EventSource;

/// Result of a listing search. A failed fetch is reported in `error`
/// alongside an empty list instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Application service for reading the event catalog.
pub struct EventService<S> {
    source: S,
}

impl<S: EventSource> EventService<S> {
    /// Create a new service backed by the given event source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the events matching `filter`.
    ///
    /// Title, location and category are matched by the source; the date
    /// window is applied here. Source failures are logged and turned into
    /// [`Listing::error`].
    pub async fn search(&self, filter: &FilterState) -> Listing {
        match self.source.list(&filter.event_query()).await {
            Ok(events) => Listing {
                events: events
                    .into_iter()
                    .filter(|event| filter.matches(event))
                    .collect(),
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "event listing failed");
                Listing {
                    events: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Look up one event by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`EventifyError::NotFound`] when the source has no such
    /// event, or the source error.
    pub async fn get_event(&self, id: EventId) -> Result<Event, EventifyError> {
        self.source.find_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Event",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Every event, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns the source error.
    pub async fn list_all(&self) -> Result<Vec<Event>, EventifyError> {
        self.source.list(&EventQuery::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryEventSource, sample_event};
    use chrono::{TimeZone, Utc};
    use eventify_domain::filter::DateRange;

    fn make_service() -> EventService<InMemoryEventSource> {
        EventService::new(InMemoryEventSource::with(vec![
            sample_event(1, "Jazz Night"),
            sample_event(2, "Rust Conf"),
        ]))
    }

    #[tokio::test]
    async fn should_list_events_matching_server_side_filter() {
        let svc = make_service();
        let filter = FilterState {
            title: "Jazz".to_string(),
            ..FilterState::default()
        };
        let listing = svc.search(&filter).await;
        assert_eq!(listing.error, None);
        assert_eq!(listing.events.len(), 1);
        assert_eq!(listing.events[0].id, EventId::new(1));
    }

    #[tokio::test]
    async fn should_apply_date_window_locally() {
        let svc = make_service();
        let outside = FilterState {
            date_range: Some(
                DateRange::new(
                    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap(),
                )
                .unwrap(),
            ),
            ..FilterState::default()
        };
        assert!(svc.search(&outside).await.events.is_empty());

        let inside = FilterState {
            date_range: Some(
                DateRange::new(
                    Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2025, 5, 31, 0, 0, 0).unwrap(),
                )
                .unwrap(),
            ),
            ..FilterState::default()
        };
        assert_eq!(svc.search(&inside).await.events.len(), 2);
    }

    #[tokio::test]
    async fn should_report_source_failure_as_listing_error() {
        let source = InMemoryEventSource::with(vec![sample_event(1, "Jazz Night")]);
        source.set_failing(true);
        let svc = EventService::new(source);

        let listing = svc.search(&FilterState::default()).await;
        assert!(listing.events.is_empty());
        assert_eq!(
            listing.error.as_deref(),
            Some("event source error: HTTP error! status: 500")
        );
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let svc = make_service();
        let err = svc.get_event(EventId::new(99)).await.unwrap_err();
        assert!(matches!(err, EventifyError::NotFound(ref e) if e.id == "99"));
    }

    #[tokio::test]
    async fn should_get_event_by_exact_id() {
        let svc = make_service();
        let event = svc.get_event(EventId::new(2)).await.unwrap();
        assert_eq!(event.title, "Rust Conf");
    }

    #[tokio::test]
    async fn should_list_all_events() {
        let svc = make_service();
        assert_eq!(svc.list_all().await.unwrap().len(), 2);
    }

    #[test]
    fn should_omit_error_when_serializing_successful_listing() {
        let json = serde_json::to_value(Listing::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "events": [] }));
    }
}
