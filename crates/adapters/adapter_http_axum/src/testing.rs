//! Stub ports shared by the handler tests.

use std::future::Future;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};

use eventify_app::ports::{Clock, EventSource};
use eventify_domain::error::EventifyError;
use eventify_domain::event::{Event, EventType};
use eventify_domain::filter::EventQuery;
use eventify_domain::id::EventId;
use eventify_domain::time::Timestamp;

use crate::state::AppState;

/// 2025-05-10 16:00 UTC, two hours before [`event`] starts.
pub(crate) fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 5, 10, 16, 0, 0).unwrap()
}

pub(crate) fn event(id: u64, title: &str) -> Event {
    Event {
        id: EventId::new(id),
        title: title.to_string(),
        location: "Berlin".to_string(),
        description: String::new(),
        event_type: EventType::Concert,
        starts_at: Utc.with_ymd_and_hms(2025, 5, 10, 18, 0, 0).unwrap(),
        expires_at: Utc.with_ymd_and_hms(2025, 5, 10, 23, 0, 0).unwrap(),
        image_url: String::new(),
    }
}

#[derive(Default)]
pub(crate) struct StubSource {
    pub(crate) events: Mutex<Vec<Event>>,
}

impl StubSource {
    pub(crate) fn with(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
        }
    }
}

impl EventSource for StubSource {
    fn list(
        &self,
        query: &EventQuery,
    ) -> impl Future<Output = Result<Vec<Event>, EventifyError>> + Send {
        let events: Vec<Event> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| query.title.as_ref().is_none_or(|t| e.title.contains(t.as_str())))
            .cloned()
            .collect();
        async { Ok(events) }
    }

    fn find_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, EventifyError>> + Send {
        let event = self.events.lock().unwrap().iter().find(|e| e.id == id).cloned();
        async { Ok(event) }
    }
}

pub(crate) struct FixedClock(pub(crate) Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

pub(crate) fn state_with(events: Vec<Event>) -> AppState<StubSource, FixedClock> {
    AppState::new(StubSource::with(events), FixedClock(now()))
}
