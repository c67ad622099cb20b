//! In-process navigation history.
//!
//! [`SharedHistory`] is a [`Navigator`] that records navigations on a
//! browser-like history stack. The HTTP layer and the tests use it where
//! there is no real browser to drive.

use std::sync::{Mutex, MutexGuard, PoisonError};

use eventify_domain::query::{NavigationMode, QueryString};

use crate::ports::Navigator;

/// One history entry: a path plus its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub query: QueryString,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(path: impl Into<String>, query: QueryString) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Split a relative URL such as `/events?type=Expo`.
    #[must_use]
    pub fn parse(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, QueryString::parse(query)),
            None => Self::new(url, QueryString::new()),
        }
    }

    /// Relative URL of this entry.
    #[must_use]
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// Linear history stack with a cursor, like a browser tab's.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl BrowserHistory {
    #[must_use]
    pub fn new(initial: HistoryEntry) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Number of entries, including forward ones. Never zero.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Add an entry after the current one, dropping forward entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, entry: HistoryEntry) {
        self.entries[self.cursor] = entry;
    }

    pub fn apply(&mut self, entry: HistoryEntry, mode: NavigationMode) {
        match mode {
            NavigationMode::Push => self.push(entry),
            NavigationMode::Replace => self.replace(entry),
        }
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

/// Thread-safe [`BrowserHistory`] usable as a [`Navigator`].
#[derive(Debug)]
pub struct SharedHistory {
    inner: Mutex<BrowserHistory>,
}

impl SharedHistory {
    #[must_use]
    pub fn new(initial: HistoryEntry) -> Self {
        Self {
            inner: Mutex::new(BrowserHistory::new(initial)),
        }
    }

    /// Start at a relative URL such as `/?title=jazz`.
    #[must_use]
    pub fn starting_at(url: &str) -> Self {
        Self::new(HistoryEntry::parse(url))
    }

    #[must_use]
    pub fn current(&self) -> HistoryEntry {
        self.lock().current().clone()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.lock().entry_count()
    }

    /// Go back one entry, returning the entry now current.
    pub fn back(&self) -> Option<HistoryEntry> {
        self.lock().back().cloned()
    }

    pub fn forward(&self) -> Option<HistoryEntry> {
        self.lock().forward().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, BrowserHistory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for SharedHistory {
    fn navigate(&self, query: &QueryString, mode: NavigationMode) {
        let mut history = self.lock();
        let entry = HistoryEntry::new(history.current().path.clone(), query.clone());
        tracing::trace!(url = %entry.to_url(), ?mode, "navigate");
        history.apply(entry, mode);
    }

    fn navigate_to_path(&self, path: &str, mode: NavigationMode) {
        let entry = HistoryEntry::parse(path);
        tracing::trace!(url = %entry.to_url(), ?mode, "navigate to path");
        self.lock().apply(entry, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_url_into_path_and_query() {
        let entry = HistoryEntry::parse("/?title=jazz&type=Expo");
        assert_eq!(entry.path, "/");
        assert_eq!(entry.query.get("type"), Some("Expo"));
        assert_eq!(entry.to_url(), "/?title=jazz&type=Expo");
        assert_eq!(HistoryEntry::parse("/events/3").to_url(), "/events/3");
    }

    #[test]
    fn should_not_grow_history_on_replace() {
        let history = SharedHistory::starting_at("/");
        history.navigate(&QueryString::parse("title=a"), NavigationMode::Replace);
        history.navigate(&QueryString::parse("title=ab"), NavigationMode::Replace);
        assert_eq!(history.entry_count(), 1);
        assert_eq!(history.current().to_url(), "/?title=ab");
    }

    #[test]
    fn should_go_back_to_previous_entry_after_push() {
        let history = SharedHistory::starting_at("/?type=Expo");
        history.navigate_to_path("/events/7", NavigationMode::Push);
        assert_eq!(history.entry_count(), 2);

        let previous = history.back().unwrap();
        assert_eq!(previous.to_url(), "/?type=Expo");
        assert_eq!(history.back(), None);

        let next = history.forward().unwrap();
        assert_eq!(next.path, "/events/7");
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn should_drop_forward_entries_on_push() {
        let mut history = BrowserHistory::new(HistoryEntry::parse("/"));
        history.push(HistoryEntry::parse("/events/1"));
        history.push(HistoryEntry::parse("/events/2"));
        history.back();
        history.back();
        history.push(HistoryEntry::parse("/events/3"));
        assert_eq!(history.entry_count(), 2);
        assert_eq!(history.current().path, "/events/3");
        assert!(history.forward().is_none());
    }

    #[test]
    fn should_keep_path_when_navigating_query() {
        let history = SharedHistory::starting_at("/listing?ref=x");
        history.navigate(&QueryString::parse("ref=x&title=y"), NavigationMode::Replace);
        assert_eq!(history.current().path, "/listing");
        assert_eq!(history.entry_count(), 1);
    }
}
