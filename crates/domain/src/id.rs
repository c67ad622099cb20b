//! Typed identifier for events.
//!
//! The remote API is inconsistent about the JSON type of `id`: some
//! endpoints answer `1`, others `"1"`. Both decode to the same [`EventId`];
//! it always encodes as a number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for an [`Event`](crate::event::Event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Wrap a raw numeric id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EventId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(raw) => Ok(Self(raw)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = EventId::new(17);
        let parsed: EventId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_decode_numeric_json() {
        let id: EventId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn should_decode_string_json() {
        let id: EventId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn should_encode_as_number() {
        assert_eq!(serde_json::to_string(&EventId::new(3)).unwrap(), "3");
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        assert!(EventId::from_str("abc").is_err());
        assert!(serde_json::from_str::<EventId>("\"abc\"").is_err());
    }
}
