//! Filter state — the user-editable listing filters and their mapping to
//! the URL query string.
//!
//! The query string is the source of truth; a [`FilterState`] is a parsed
//! view of it. Absence of a parameter is equivalent to its default value,
//! so defaults are never written back.

use serde::Serialize;

use crate::error::ValidationError;
use crate::event::{Event, EventType};
use crate::location::{KNOWN_LOCATIONS, is_known_location};
use crate::query::QueryString;
use crate::time::{Timestamp, format_timestamp, parse_timestamp};

pub const TITLE_PARAM: &str = "title";
pub const LOCATION_PARAM: &str = "location";
pub const TYPE_PARAM: &str = "type";
pub const FROM_PARAM: &str = "from";
pub const TO_PARAM: &str = "to";

/// Selector value meaning "no restriction". Never written to the URL.
pub const ALL: &str = "all";

/// Closed date window. Both ends are always present and `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: Timestamp,
    to: Timestamp,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedDateRange`] when `from > to`.
    pub fn new(from: Timestamp, to: Timestamp) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError::InvertedDateRange);
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn from(&self) -> Timestamp {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Timestamp {
        self.to
    }

    /// Whether the event lies strictly inside the window: it must start
    /// after `from` and end before `to`.
    #[must_use]
    pub fn contains(&self, event: &Event) -> bool {
        event.starts_at > self.from && event.expires_at < self.to
    }
}

/// Parsed listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search, `""` when absent.
    pub title: String,
    /// Selected location, `None` for "all".
    pub location: Option<String>,
    /// Selected category, `None` for "all".
    pub event_type: Option<String>,
    pub date_range: Option<DateRange>,
}

impl FilterState {
    /// Read the recognized parameters of `query`; everything else is ignored.
    ///
    /// A date range is formed only when both `from` and `to` are present,
    /// parse, and are in order. Any other combination means "no range".
    #[must_use]
    pub fn from_query(query: &QueryString) -> Self {
        let date_range = match (query.get(FROM_PARAM), query.get(TO_PARAM)) {
            (Some(from), Some(to)) => parse_timestamp(from)
                .and_then(|from| DateRange::new(from, parse_timestamp(to)?))
                .ok(),
            _ => None,
        };

        Self {
            title: query.get(TITLE_PARAM).unwrap_or_default().to_owned(),
            location: query.get(LOCATION_PARAM).and_then(selection),
            event_type: query.get(TYPE_PARAM).and_then(selection),
            date_range,
        }
    }

    /// Write this state's recognized parameters into a copy of `base`.
    ///
    /// Parameters at their default value are removed; unrecognized
    /// parameters of `base` are left untouched.
    #[must_use]
    pub fn apply_to(&self, base: &QueryString) -> QueryString {
        let mut query = base.clone();
        write_title(&mut query, &self.title);
        write_selection(&mut query, LOCATION_PARAM, self.location.as_deref());
        write_selection(&mut query, TYPE_PARAM, self.event_type.as_deref());
        write_date_range(&mut query, self.date_range.as_ref());
        query
    }

    /// The query string holding only this state's non-default parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        self.apply_to(&QueryString::new())
    }

    /// Server-side part of the filter, sent to the event source.
    #[must_use]
    pub fn event_query(&self) -> EventQuery {
        EventQuery {
            title: Some(self.title.clone()).filter(|title| !title.is_empty()),
            location: self.location.clone(),
            event_type: self.event_type.clone(),
        }
    }

    /// Client-side part of the filter: the date window.
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        self.date_range
            .as_ref()
            .is_none_or(|range| range.contains(event))
    }
}

/// Filter forwarded to the remote event API. The exact matching semantics
/// belong to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

/// Choices offered by the location and category selectors, in display
/// order. A value selected through the URL that is not a known option is
/// appended so the selector can still show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    #[must_use]
    pub fn for_state(state: &FilterState) -> Self {
        let mut locations: Vec<String> =
            KNOWN_LOCATIONS.iter().map(ToString::to_string).collect();
        if let Some(location) = state
            .location
            .as_deref()
            .filter(|l| !is_known_location(l))
        {
            locations.push(location.to_owned());
        }

        let mut categories: Vec<String> =
            EventType::KNOWN.iter().map(ToString::to_string).collect();
        if let Some(category) = state.event_type.as_deref() {
            let parsed: EventType = category.parse().unwrap_or_else(|never| match never {});
            if !parsed.is_known() {
                categories.push(parsed.to_string());
            }
        }

        Self {
            locations,
            categories,
        }
    }
}

/// Normalize a selector value: empty and [`ALL`] mean "no restriction".
#[must_use]
pub fn selection(value: &str) -> Option<String> {
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Set `title`, or remove it when empty.
pub fn write_title(query: &mut QueryString, title: &str) {
    if title.is_empty() {
        query.remove(TITLE_PARAM);
    } else {
        query.set(TITLE_PARAM, title);
    }
}

/// Set a selector parameter, or remove it for [`ALL`] / empty / `None`.
pub fn write_selection(query: &mut QueryString, key: &str, value: Option<&str>) {
    match value.and_then(selection) {
        Some(value) => query.set(key, value),
        None => query.remove(key),
    }
}

/// Set `from` and `to` together, or remove both.
pub fn write_date_range(query: &mut QueryString, range: Option<&DateRange>) {
    match range {
        Some(range) => {
            query.set(FROM_PARAM, format_timestamp(&range.from));
            query.set(TO_PARAM, format_timestamp(&range.to));
        }
        None => {
            query.remove(FROM_PARAM);
            query.remove(TO_PARAM);
        }
    }
}
