//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for event start/end times and date-range bounds.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an ISO-8601 timestamp as found in the `from` / `to` query parameters.
///
/// Accepts full RFC 3339 timestamps (`2025-05-01T00:00:00.000Z`) and bare
/// calendar dates (`2025-05-01`, read as midnight UTC).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimestamp`] when neither form matches.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, ValidationError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.to_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValidationError::InvalidTimestamp(value.to_owned()))
}

/// Format a timestamp the way it is written to the URL: UTC, millisecond
/// precision, `Z` suffix.
#[must_use]
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
