//! In-memory port implementations shared by the unit tests.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{TimeZone, Utc};

use eventify_domain::error::EventifyError;
use eventify_domain::event::{Event, EventType};
use eventify_domain::filter::EventQuery;
use eventify_domain::id::EventId;

use crate::ports::{EventSource, Revalidator};

pub(crate) fn sample_event(id: u64, title: &str) -> Event {
    Event {
        id: EventId::new(id),
        title: title.to_string(),
        location: "Berlin".to_string(),
        description: format!("{title} description"),
        event_type: EventType::Concert,
        starts_at: Utc.with_ymd_and_hms(2025, 5, 10, 18, 0, 0).unwrap(),
        expires_at: Utc.with_ymd_and_hms(2025, 5, 10, 23, 0, 0).unwrap(),
        image_url: format!("https://img.example/{id}.png"),
    }
}

#[derive(Default)]
pub(crate) struct InMemoryEventSource {
    events: Mutex<Vec<Event>>,
    failing: AtomicBool,
}

impl InMemoryEventSource {
    pub(crate) fn with(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            failing: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn upsert(&self, event: Event) {
        let mut events = self.events.lock().unwrap();
        events.retain(|e| e.id != event.id);
        events.push(event);
    }

    pub(crate) fn remove(&self, id: EventId) {
        self.events.lock().unwrap().retain(|e| e.id != id);
    }

    fn check(&self) -> Result<(), EventifyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(EventifyError::Source("HTTP error! status: 500".into()));
        }
        Ok(())
    }
}

impl EventSource for InMemoryEventSource {
    fn list(
        &self,
        query: &EventQuery,
    ) -> impl Future<Output = Result<Vec<Event>, EventifyError>> + Send {
        let result = self.check().map(|()| {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| query.title.as_ref().is_none_or(|t| e.title.contains(t.as_str())))
                .filter(|e| query.location.as_ref().is_none_or(|l| e.location == *l))
                .filter(|e| {
                    query
                        .event_type
                        .as_ref()
                        .is_none_or(|t| e.event_type.as_str() == t)
                })
                .cloned()
                .collect()
        });
        async { result }
    }

    fn find_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, EventifyError>> + Send {
        let result = self.check().map(|()| {
            self.events
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == id)
                .cloned()
        });
        async { result }
    }
}

#[derive(Default)]
pub(crate) struct RecordingRevalidator {
    pub(crate) paths: Mutex<Vec<String>>,
}

impl Revalidator for RecordingRevalidator {
    fn revalidate(&self, path: &str) -> impl Future<Output = Result<(), EventifyError>> + Send {
        self.paths.lock().unwrap().push(path.to_string());
        async { Ok(()) }
    }
}
