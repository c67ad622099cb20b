//! Event — a read-only record served by the remote event API.
//!
//! Events are never created or mutated locally; their lifecycle is owned
//! entirely by the external source.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::time::Timestamp;

/// A listed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Start of the event window. Assumed `<= expires_at`, never checked.
    pub starts_at: Timestamp,
    pub expires_at: Timestamp,
    pub image_url: String,
}

impl Event {
    /// Path of the detail page for this event, also used as the
    /// revalidation key.
    #[must_use]
    pub fn detail_path(&self) -> String {
        detail_path(self.id)
    }
}

/// Path of the detail page for the event with the given id.
#[must_use]
pub fn detail_path(id: EventId) -> String {
    format!("/events/{id}")
}

/// Extract the event id from a detail path produced by [`detail_path`].
///
/// Returns `None` for any other shape of path.
#[must_use]
pub fn id_from_detail_path(path: &str) -> Option<EventId> {
    path.strip_prefix("/events/")
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .and_then(|rest| rest.parse().ok())
}

/// Event category.
///
/// Unknown categories sent by the source are kept verbatim in
/// [`Other`](Self::Other) rather than failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Conference,
    Exhibition,
    Seminar,
    Festival,
    Expo,
    Concert,
    Competition,
    Workshop,
    Show,
    Forum,
    Parade,
    Wellness,
    Summit,
    Sports,
    Tasting,
    Symposium,
    FoodFestival,
    Other(String),
}

impl EventType {
    /// Every category offered by the category selector, in display order.
    pub const KNOWN: [Self; 17] = [
        Self::Conference,
        Self::Exhibition,
        Self::Seminar,
        Self::Festival,
        Self::Expo,
        Self::Concert,
        Self::Competition,
        Self::Workshop,
        Self::Show,
        Self::Forum,
        Self::Parade,
        Self::Wellness,
        Self::Summit,
        Self::Sports,
        Self::Tasting,
        Self::Symposium,
        Self::FoodFestival,
    ];

    /// Wire name, as used in the `type` query parameter and the API payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Conference => "Conference",
            Self::Exhibition => "Exhibition",
            Self::Seminar => "Seminar",
            Self::Festival => "Festival",
            Self::Expo => "Expo",
            Self::Concert => "Concert",
            Self::Competition => "Competition",
            Self::Workshop => "Workshop",
            Self::Show => "Show",
            Self::Forum => "Forum",
            Self::Parade => "Parade",
            Self::Wellness => "Wellness",
            Self::Summit => "Summit",
            Self::Sports => "Sports",
            Self::Tasting => "Tasting",
            Self::Symposium => "Symposium",
            Self::FoodFestival => "Food Festival",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the [`KNOWN`](Self::KNOWN) categories.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == s)
            .unwrap_or_else(|| Self::Other(s.to_owned())))
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(parsed) => parsed,
            Err(never) => match never {},
        }
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": "12",
            "title": "RustConf",
            "location": "Berlin",
            "description": "Talks about Rust",
            "type": "Conference",
            "starts_at": "2025-06-01T09:00:00.000Z",
            "expires_at": "2025-06-03T18:00:00.000Z",
            "image_url": "https://example.com/rustconf.png"
        })
    }

    #[test]
    fn should_decode_remote_payload() {
        let event: Event = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(event.id, EventId::new(12));
        assert_eq!(event.event_type, EventType::Conference);
        assert_eq!(
            event.starts_at,
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn should_keep_unknown_category_verbatim() {
        let mut json = sample_json();
        json["type"] = serde_json::json!("Hackathon");
        let event: Event = serde_json::from_value(json).unwrap();
        assert_eq!(event.event_type, EventType::Other("Hackathon".to_string()));
        assert!(!event.event_type.is_known());
    }

    #[test]
    fn should_encode_type_under_wire_name() {
        let event: Event = serde_json::from_value(sample_json()).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Conference");
        assert_eq!(json["id"], 12);
    }

    #[test]
    fn should_parse_multi_word_category() {
        assert_eq!(
            "Food Festival".parse::<EventType>().unwrap(),
            EventType::FoodFestival
        );
    }

    #[test]
    fn should_treat_records_with_any_field_changed_as_different() {
        let original: Event = serde_json::from_value(sample_json()).unwrap();
        let mut edited = original.clone();
        assert_eq!(original, edited);
        edited.description.push('!');
        assert_ne!(original, edited);
    }

    #[test]
    fn should_build_detail_path_from_id() {
        let event: Event = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(event.detail_path(), "/events/12");
    }

    #[test]
    fn should_extract_id_from_detail_path() {
        assert_eq!(id_from_detail_path("/events/12"), Some(EventId::new(12)));
        assert_eq!(id_from_detail_path("/events/12/"), Some(EventId::new(12)));
        assert_eq!(id_from_detail_path("/events/"), None);
        assert_eq!(id_from_detail_path("/events/abc"), None);
        assert_eq!(id_from_detail_path("/about"), None);
        assert_eq!(id_from_detail_path("/events/1/2"), None);
    }
}
