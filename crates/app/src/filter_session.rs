//! Filter session — runs a [`FilterSync`] on its own task.
//!
//! Inputs arrive over an mpsc channel; the latest filter snapshot is
//! published on a watch channel. The task sleeps until the pending title
//! write is due, so no timer outlives the session: dropping or closing the
//! [`FilterSession`] tears the synchronizer down and any pending write is
//! discarded.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use eventify_domain::error::ValidationError;
use eventify_domain::filter::{EventQuery, FilterState};
use eventify_domain::id::EventId;
use eventify_domain::query::QueryString;
use eventify_domain::time::Timestamp;

use crate::filter_sync::{FilterSync, Resync};
use crate::ports::Navigator;

const INPUT_CAPACITY: usize = 64;

/// User interactions and URL notifications fed into a session.
#[derive(Debug, Clone)]
pub enum FilterInput {
    TextChanged(String),
    CategoryChanged(String),
    LocationChanged(String),
    DateFromSelected(Option<Timestamp>),
    DateToSelected(Option<Timestamp>),
    DateRangeConfirmed,
    DateRangeCleared,
    EventOpened(EventId),
    /// The URL changed outside the session (back/forward, shared link).
    UrlChangedExternally(QueryString),
}

/// What observers of a session see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSnapshot {
    pub state: FilterState,
    pub url: QueryString,
    /// Server-side filter derived from [`url`](Self::url).
    pub event_query: EventQuery,
    /// Set when the last date-range confirmation was refused.
    pub date_error: Option<ValidationError>,
}

impl FilterSnapshot {
    fn of<N: Navigator>(sync: &FilterSync<N>, date_error: Option<ValidationError>) -> Self {
        Self {
            state: sync.state().clone(),
            url: sync.current_url().clone(),
            event_query: sync.event_query(),
            date_error,
        }
    }
}

/// Handle to a running filter session.
pub struct FilterSession {
    inputs: mpsc::Sender<FilterInput>,
    snapshot: watch::Receiver<FilterSnapshot>,
    task: JoinHandle<()>,
}

impl FilterSession {
    /// Start a session driving `sync`. Must be called within a tokio runtime.
    pub fn spawn<N>(sync: FilterSync<N>) -> Self
    where
        N: Navigator + Send + 'static,
    {
        let (inputs, receiver) = mpsc::channel(INPUT_CAPACITY);
        let (publisher, snapshot) = watch::channel(FilterSnapshot::of(&sync, None));
        let task = tokio::spawn(run(sync, receiver, publisher));
        Self {
            inputs,
            snapshot,
            task,
        }
    }

    /// Queue an input for the session.
    ///
    /// # Errors
    ///
    /// Returns the input back if the session task has stopped.
    pub async fn send(
        &self,
        input: FilterInput,
    ) -> Result<(), mpsc::error::SendError<FilterInput>> {
        self.inputs.send(input).await
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> FilterSnapshot {
        self.snapshot.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FilterSnapshot> {
        self.snapshot.clone()
    }

    /// Stop the session and wait for its task. Pending writes are dropped.
    pub async fn close(self) {
        drop(self.inputs);
        if let Err(err) = self.task.await {
            tracing::warn!(error = %err, "filter session task failed");
        }
    }
}

async fn run<N: Navigator>(
    mut sync: FilterSync<N>,
    mut inputs: mpsc::Receiver<FilterInput>,
    publisher: watch::Sender<FilterSnapshot>,
) {
    tracing::debug!(url = %sync.current_url(), "filter session started");
    let mut date_error = None;

    loop {
        let deadline = sync.next_deadline();
        let due = async move {
            match deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            input = inputs.recv() => {
                let Some(input) = input else { break };
                date_error = apply(&mut sync, input, date_error);
            }
            () = due => {
                sync.poll_debounce(Instant::now());
            }
        }

        let next = FilterSnapshot::of(&sync, date_error.clone());
        publisher.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    sync.teardown();
    tracing::debug!("filter session stopped");
}

fn apply<N: Navigator>(
    sync: &mut FilterSync<N>,
    input: FilterInput,
    date_error: Option<ValidationError>,
) -> Option<ValidationError> {
    match input {
        FilterInput::TextChanged(title) => sync.set_title(title, Instant::now()),
        FilterInput::CategoryChanged(value) => {
            sync.set_category_filter(&value);
        }
        FilterInput::LocationChanged(value) => {
            sync.set_location_filter(&value);
        }
        FilterInput::DateFromSelected(from) => sync.select_date_from(from),
        FilterInput::DateToSelected(to) => sync.select_date_to(to),
        FilterInput::DateRangeConfirmed => {
            return match sync.confirm_date_range() {
                Ok(_) => None,
                Err(err) => {
                    tracing::debug!(error = %err, "date range not applied");
                    Some(err)
                }
            };
        }
        FilterInput::DateRangeCleared => {
            sync.clear_date_range();
            return None;
        }
        FilterInput::EventOpened(id) => sync.open_event(id),
        FilterInput::UrlChangedExternally(query) => {
            if sync.on_url_changed_externally(query) == Resync::Rehydrated {
                return None;
            }
        }
    }
    date_error
}
