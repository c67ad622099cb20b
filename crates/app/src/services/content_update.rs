//! Content update check — detect that a displayed event changed at the
//! source and refresh its cached page.

use eventify_domain::error::EventifyError;
use eventify_domain::event::Event;
use eventify_domain::id::EventId;

use crate::ports::{EventSource, Revalidator};

/// Outcome of [`ContentUpdateService::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentUpdate {
    /// The source still serves exactly the displayed record.
    Unchanged,
    /// The record changed; the page was revalidated and this is the new one.
    Revalidated(Event),
    /// The record is gone; the page was revalidated.
    Removed,
}

impl ContentUpdate {
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// The record the page should now display, if any.
    #[must_use]
    pub fn into_event(self, original: Event) -> Option<Event> {
        match self {
            Self::Unchanged => Some(original),
            Self::Revalidated(event) => Some(event),
            Self::Removed => None,
        }
    }
}

/// Compares a displayed event with the source and triggers revalidation.
pub struct ContentUpdateService<S, R> {
    source: S,
    revalidator: R,
}

impl<S: EventSource, R: Revalidator> ContentUpdateService<S, R> {
    pub fn new(source: S, revalidator: R) -> Self {
        Self {
            source,
            revalidator,
        }
    }

    /// Refetch event `id` and compare it field by field with `original`.
    /// When they differ, `path` is revalidated.
    ///
    /// # Errors
    ///
    /// Returns the source or revalidation error. Nothing is revalidated
    /// when the refetch fails.
    pub async fn check(
        &self,
        path: &str,
        id: EventId,
        original: &Event,
    ) -> Result<ContentUpdate, EventifyError> {
        let latest = self.source.find_by_id(id).await?;
        if latest.as_ref() == Some(original) {
            tracing::debug!(path, "no change");
            return Ok(ContentUpdate::Unchanged);
        }

        self.revalidator.revalidate(path).await?;
        tracing::info!(path, "path revalidated due to data change");
        Ok(latest.map_or(ContentUpdate::Removed, ContentUpdate::Revalidated))
    }
}
