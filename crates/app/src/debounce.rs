//! Cancellable deferred value — the debounce half of the filter synchronizer.
//!
//! A [`Debouncer`] does not own a timer task. Its owner asks for the
//! [`deadline`](Debouncer::deadline), sleeps until then, and collects the
//! value with [`take_due`](Debouncer::take_due). This keeps the state
//! machine deterministic and lets tests drive it with explicit instants.

use std::time::Duration;

use tokio::time::Instant;

/// Quiet period before a typed search title is written to the URL.
pub const TITLE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds the latest value until it has been stable for `quiet_period`.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Arm (or re-arm) with `value`. Any previously pending value is
    /// discarded and the quiet period restarts from `now`.
    pub fn arm(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.quiet_period));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Take the pending value if its quiet period has elapsed at `now`.
    /// A value is yielded at most once.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((value, deadline)) if now >= deadline => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }
}
