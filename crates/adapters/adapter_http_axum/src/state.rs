//! Shared application state for axum handlers.

use std::sync::Arc;

use eventify_app::page_cache::PageCache;
use eventify_app::ports::{Clock, EventSource};
use eventify_app::services::content_update::ContentUpdateService;
use eventify_app::services::event_service::EventService;

/// Application state shared across all axum handlers.
///
/// Generic over the event source and the clock to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S, C> {
    /// The event source every service reads from.
    pub source: Arc<S>,
    /// Listing and lookup use-cases.
    pub event_service: Arc<EventService<Arc<S>>>,
    /// Pre-rendered detail pages; also the revalidation target.
    pub pages: Arc<PageCache<Arc<S>>>,
    pub content_updates: Arc<ContentUpdateService<Arc<S>, Arc<PageCache<Arc<S>>>>>,
    /// Time source for countdowns.
    pub clock: Arc<C>,
}

impl<S, C> Clone for AppState<S, C> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            event_service: Arc::clone(&self.event_service),
            pages: Arc::clone(&self.pages),
            content_updates: Arc::clone(&self.content_updates),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> AppState<S, C>
where
    S: EventSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Wire every service around one shared event source.
    pub fn new(source: S, clock: C) -> Self {
        let source = Arc::new(source);
        let pages = Arc::new(PageCache::new(Arc::clone(&source)));
        Self {
            event_service: Arc::new(EventService::new(Arc::clone(&source))),
            content_updates: Arc::new(ContentUpdateService::new(
                Arc::clone(&source),
                Arc::clone(&pages),
            )),
            pages,
            source,
            clock: Arc::new(clock),
        }
    }
}
