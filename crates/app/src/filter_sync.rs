//! Filter state synchronizer — keeps the listing filters and the URL query
//! string consistent in both directions.
//!
//! The URL is the source of truth. [`FilterSync`] caches a parsed
//! [`FilterState`] for responsive editing and writes changes back through
//! the injected [`Navigator`]:
//!
//! - the search title is debounced ([`TITLE_DEBOUNCE`]) and only the final
//!   stable value is written, and only if it differs from the URL;
//! - category and location selections are written immediately;
//! - a date range is written only when both ends are confirmed together;
//! - every filter write is a [`NavigationMode::Replace`].
//!
//! External URL changes (back/forward, shared links) re-hydrate the local
//! state without writing anything. A notification carrying the URL this
//! instance already holds is an echo of its own write and changes nothing,
//! so state and URL never chase each other.

use tokio::time::Instant;

use eventify_domain::error::ValidationError;
use eventify_domain::event::detail_path;
use eventify_domain::filter::{
    DateRange, EventQuery, FilterState, LOCATION_PARAM, TITLE_PARAM, TYPE_PARAM, selection,
    write_date_range, write_selection, write_title,
};
use eventify_domain::id::EventId;
use eventify_domain::query::{NavigationMode, QueryString};
use eventify_domain::time::Timestamp;

use crate::debounce::{Debouncer, TITLE_DEBOUNCE};
use crate::ports::Navigator;

/// Date-picker selection that has not been confirmed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateDraft {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
}

impl From<Option<DateRange>> for DateDraft {
    fn from(range: Option<DateRange>) -> Self {
        Self {
            from: range.map(|r| r.from()),
            to: range.map(|r| r.to()),
        }
    }
}

/// Outcome of [`FilterSync::on_url_changed_externally`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resync {
    /// The URL already matches; nothing to do.
    Unchanged,
    /// Local state was rebuilt from the new URL.
    Rehydrated,
}

/// Bidirectional, loop-safe sync between filter fields and the URL query.
pub struct FilterSync<N> {
    navigator: N,
    url: QueryString,
    state: FilterState,
    title: Debouncer<String>,
    draft: DateDraft,
}

impl<N: Navigator> FilterSync<N> {
    /// Build the synchronizer for a page loaded with `query`. Nothing is
    /// written to the URL.
    pub fn init_from_url(query: QueryString, navigator: N) -> Self {
        let state = FilterState::from_query(&query);
        Self {
            navigator,
            draft: DateDraft::from(state.date_range),
            state,
            url: query,
            title: Debouncer::new(TITLE_DEBOUNCE),
        }
    }

    /// Local filter state, including a typed but not yet written title.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The URL query as last written or observed.
    #[must_use]
    pub fn current_url(&self) -> &QueryString {
        &self.url
    }

    #[must_use]
    pub fn date_draft(&self) -> DateDraft {
        self.draft
    }

    /// Server-side filter for the listing, derived from the URL rather than
    /// the local cache so fetches follow written state only.
    #[must_use]
    pub fn event_query(&self) -> EventQuery {
        FilterState::from_query(&self.url).event_query()
    }

    /// When the pending title write becomes due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.title.deadline()
    }

    #[must_use]
    pub fn has_pending_write(&self) -> bool {
        self.title.is_armed()
    }

    /// Update the search title locally and (re)start the quiet period.
    pub fn set_title(&mut self, value: impl Into<String>, now: Instant) {
        let value = value.into();
        self.state.title.clone_from(&value);
        self.title.arm(value, now);
    }

    /// Write the pending title if its quiet period has elapsed.
    ///
    /// Returns `true` when the URL was written.
    pub fn poll_debounce(&mut self, now: Instant) -> bool {
        let Some(title) = self.title.take_due(now) else {
            return false;
        };
        if self.url.get(TITLE_PARAM).unwrap_or_default() == title {
            tracing::debug!(%title, "title already in URL, skipping write");
            return false;
        }
        let mut next = self.url.clone();
        write_title(&mut next, &title);
        self.write(next)
    }

    /// Select a category; `"all"` or empty clears it. Written immediately.
    pub fn set_category_filter(&mut self, value: &str) -> bool {
        self.state.event_type = selection(value);
        let mut next = self.url.clone();
        write_selection(&mut next, TYPE_PARAM, Some(value));
        self.write(next)
    }

    /// Select a location; `"all"` or empty clears it. Written immediately.
    pub fn set_location_filter(&mut self, value: &str) -> bool {
        self.state.location = selection(value);
        let mut next = self.url.clone();
        write_selection(&mut next, LOCATION_PARAM, Some(value));
        self.write(next)
    }

    /// Pick (or unpick) the start of the date range. Not written until
    /// [`confirm_date_range`](Self::confirm_date_range).
    pub fn select_date_from(&mut self, from: Option<Timestamp>) {
        self.draft.from = from;
    }

    /// Pick (or unpick) the end of the date range.
    pub fn select_date_to(&mut self, to: Option<Timestamp>) {
        self.draft.to = to;
    }

    /// Write the drafted range. Both ends must be present.
    ///
    /// # Errors
    ///
    /// [`ValidationError::IncompleteDateRange`] when either end is missing,
    /// [`ValidationError::InvertedDateRange`] when the ends are out of order.
    /// Nothing is written in either case.
    pub fn confirm_date_range(&mut self) -> Result<bool, ValidationError> {
        let (Some(from), Some(to)) = (self.draft.from, self.draft.to) else {
            return Err(ValidationError::IncompleteDateRange);
        };
        let range = DateRange::new(from, to)?;
        self.state.date_range = Some(range);
        let mut next = self.url.clone();
        write_date_range(&mut next, Some(&range));
        Ok(self.write(next))
    }

    /// Draft and confirm a range in one step.
    ///
    /// # Errors
    ///
    /// See [`confirm_date_range`](Self::confirm_date_range).
    pub fn set_date_range(&mut self, from: Timestamp, to: Timestamp) -> Result<bool, ValidationError> {
        self.draft = DateDraft {
            from: Some(from),
            to: Some(to),
        };
        self.confirm_date_range()
    }

    /// Clear the draft and remove both `from` and `to` from the URL.
    pub fn clear_date_range(&mut self) -> bool {
        self.draft = DateDraft::default();
        self.state.date_range = None;
        let mut next = self.url.clone();
        write_date_range(&mut next, None);
        self.write(next)
    }

    /// Open an event's detail page. This is a real navigation and gets its
    /// own history entry.
    pub fn open_event(&self, id: EventId) {
        self.navigator
            .navigate_to_path(&detail_path(id), NavigationMode::Push);
    }

    /// React to a URL change this instance did not initiate.
    ///
    /// Local state converges to the URL; a pending title write is dropped
    /// so it cannot overwrite what the user navigated to. Nothing is
    /// written back.
    pub fn on_url_changed_externally(&mut self, query: QueryString) -> Resync {
        if query == self.url {
            tracing::debug!(%query, "URL already in sync");
            return Resync::Unchanged;
        }

        self.title.cancel();
        self.state = FilterState::from_query(&query);
        self.draft = DateDraft::from(self.state.date_range);
        self.url = query;
        tracing::debug!(url = %self.url, "filters re-hydrated from URL");
        Resync::Rehydrated
    }

    /// Drop any pending write. Call when the filter view goes away.
    pub fn teardown(&mut self) {
        self.title.cancel();
    }

    fn write(&mut self, next: QueryString) -> bool {
        if next == self.url {
            tracing::debug!(url = %next, "URL unchanged, skipping write");
            return false;
        }
        self.url = next;
        self.navigator.navigate(&self.url, NavigationMode::Replace);
        true
    }
}
