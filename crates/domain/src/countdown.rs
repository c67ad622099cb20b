//! Countdown — where "now" sits relative to an event window, and how much
//! time is left until the next boundary.
//!
//! The calculation is stateless: every evaluation starts from scratch with
//! `(now, starts_at, expires_at)`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::time::Timestamp;

/// How often a displayed countdown is re-evaluated.
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Temporal phase of an event relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownPhase {
    /// Not started yet; counting down to `starts_at`.
    Upcoming,
    /// Running; counting down to `expires_at`.
    Active,
    /// Over. No breakdown is shown.
    Expired,
}

impl CountdownPhase {
    /// Heading shown above the countdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Starting in",
            Self::Active => "Ending in",
            Self::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for CountdownPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Remaining time, truncated to whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Remaining {
    /// Break a number of whole seconds down. Leftover seconds are dropped,
    /// never rounded up.
    #[must_use]
    pub fn from_secs(total: u64) -> Self {
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
        }
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub phase: CountdownPhase,
    pub remaining: Remaining,
}

impl Countdown {
    /// Whether the days/hours/minutes breakdown should be displayed.
    #[must_use]
    pub fn shows_breakdown(&self) -> bool {
        self.phase != CountdownPhase::Expired
    }
}

/// The two boundaries a countdown tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub starts_at: Timestamp,
    pub expires_at: Timestamp,
}

impl EventWindow {
    #[must_use]
    pub fn evaluate(&self, now: Timestamp) -> Countdown {
        evaluate(now, self.starts_at, self.expires_at)
    }
}

impl From<&Event> for EventWindow {
    fn from(event: &Event) -> Self {
        Self {
            starts_at: event.starts_at,
            expires_at: event.expires_at,
        }
    }
}

/// Classify `now` against `[starts_at, expires_at)` and compute the time
/// left until the next boundary.
///
/// With `starts_at == expires_at` the active window is empty and the phase
/// goes straight from upcoming to expired.
#[must_use]
pub fn evaluate(now: Timestamp, starts_at: Timestamp, expires_at: Timestamp) -> Countdown {
    let (phase, target) = if now < starts_at {
        (CountdownPhase::Upcoming, starts_at)
    } else if now < expires_at {
        (CountdownPhase::Active, expires_at)
    } else {
        return Countdown {
            phase: CountdownPhase::Expired,
            remaining: Remaining::default(),
        };
    };

    // `target > now` here, so the difference is positive.
    let secs = u64::try_from((target - now).num_seconds()).unwrap_or_default();
    Countdown {
        phase,
        remaining: Remaining::from_secs(secs),
    }
}
