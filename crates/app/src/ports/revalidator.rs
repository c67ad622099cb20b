//! Revalidation port — refresh cached content for one page.

use std::future::Future;

use eventify_domain::error::EventifyError;

/// Asks whatever caches rendered pages to refresh one path.
pub trait Revalidator {
    /// Refresh the cached content behind `path` (e.g. `/events/3`).
    fn revalidate(&self, path: &str) -> impl Future<Output = Result<(), EventifyError>> + Send;
}

impl<T: Revalidator + Send + Sync> Revalidator for std::sync::Arc<T> {
    fn revalidate(&self, path: &str) -> impl Future<Output = Result<(), EventifyError>> + Send {
        (**self).revalidate(path)
    }
}
