//! Navigator port — the only way the application changes the URL.
//!
//! Replaces the page framework's ambient router: the filter synchronizer is
//! handed a `Navigator` instead of reaching for a global.

use eventify_domain::query::{NavigationMode, QueryString};

/// Rewrites the current URL.
pub trait Navigator {
    /// Navigate to the current page with `query` as its query string.
    fn navigate(&self, query: &QueryString, mode: NavigationMode);

    /// Navigate to another path (e.g. an event detail page).
    fn navigate_to_path(&self, path: &str, mode: NavigationMode);
}

impl<T: Navigator + ?Sized> Navigator for std::sync::Arc<T> {
    fn navigate(&self, query: &QueryString, mode: NavigationMode) {
        (**self).navigate(query, mode);
    }

    fn navigate_to_path(&self, path: &str, mode: NavigationMode) {
        (**self).navigate_to_path(path, mode);
    }
}
