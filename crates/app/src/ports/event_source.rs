//! Event source port — read access to the remote event API.

use std::future::Future;

use eventify_domain::error::EventifyError;
use eventify_domain::event::Event;
use eventify_domain::filter::EventQuery;
use eventify_domain::id::EventId;

/// Read-only catalog of [`Event`]s.
pub trait EventSource {
    /// List events matching the server-side filter, in no guaranteed order.
    ///
    /// A filter that matches nothing yields an empty list, not an error.
    fn list(
        &self,
        query: &EventQuery,
    ) -> impl Future<Output = Result<Vec<Event>, EventifyError>> + Send;

    /// Fetch the event whose id is exactly `id`.
    fn find_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, EventifyError>> + Send;
}

impl<T: EventSource + Send + Sync> EventSource for std::sync::Arc<T> {
    fn list(
        &self,
        query: &EventQuery,
    ) -> impl Future<Output = Result<Vec<Event>, EventifyError>> + Send {
        (**self).list(query)
    }

    fn find_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, EventifyError>> + Send {
        (**self).find_by_id(id)
    }
}
