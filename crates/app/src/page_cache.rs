//! Page cache — pre-rendered event detail records keyed by detail path.
//!
//! Detail pages are rendered once (at startup or on first request) and
//! then served from memory until revalidated. Revalidation refetches a
//! single path from the event source.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use eventify_domain::error::{EventifyError, NotFoundError, ValidationError};
use eventify_domain::event::{Event, detail_path, id_from_detail_path};
use eventify_domain::filter::EventQuery;
use eventify_domain::id::EventId;

use crate::ports::{EventSource, Revalidator};

pub struct PageCache<S> {
    source: S,
    pages: RwLock<HashMap<String, Event>>,
}

impl<S: EventSource + Sync> PageCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pages: RwLock::new(HashMap::new()),
        }
    }

    /// Render a page for every event the source lists. Returns how many
    /// pages were rendered.
    ///
    /// # Errors
    ///
    /// Returns the source error; the cache is left as it was.
    pub async fn prerender(&self) -> Result<usize, EventifyError> {
        let events = self.source.list(&EventQuery::default()).await?;
        let count = events.len();
        let mut pages = self.pages.write().await;
        pages.extend(events.into_iter().map(|event| (event.detail_path(), event)));
        tracing::info!(count, "pre-rendered event pages");
        Ok(count)
    }

    /// Serve the page for `id`, rendering it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`EventifyError::NotFound`] when the source has no such
    /// event, or the source error.
    pub async fn get(&self, id: EventId) -> Result<Event, EventifyError> {
        let path = detail_path(id);
        if let Some(event) = self.pages.read().await.get(&path) {
            return Ok(event.clone());
        }

        let event = self.source.find_by_id(id).await?.ok_or_else(|| NotFoundError {
            entity: "Event",
            id: id.to_string(),
        })?;
        tracing::debug!(%path, "rendered page on demand");
        self.pages.write().await.insert(path, event.clone());
        Ok(event)
    }

    /// The cached page for `id`, without touching the source.
    pub async fn cached(&self, id: EventId) -> Option<Event> {
        self.pages.read().await.get(&detail_path(id)).cloned()
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }

    async fn refresh(&self, path: &str) -> Result<(), EventifyError> {
        if path.is_empty() {
            return Err(ValidationError::MissingPath.into());
        }
        let id = id_from_detail_path(path)
            .ok_or_else(|| ValidationError::InvalidPath(path.to_string()))?;

        match self.source.find_by_id(id).await? {
            Some(event) => {
                self.pages.write().await.insert(path.to_string(), event);
                tracing::info!(path, "page revalidated");
            }
            None => {
                self.pages.write().await.remove(path);
                tracing::info!(path, "page evicted, event no longer exists");
            }
        }
        Ok(())
    }
}

impl<S: EventSource + Sync> Revalidator for PageCache<S> {
    fn revalidate(&self, path: &str) -> impl Future<Output = Result<(), EventifyError>> + Send {
        self.refresh(path)
    }
}
