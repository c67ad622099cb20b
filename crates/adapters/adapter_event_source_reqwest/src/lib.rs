//! # eventify-adapter-event-source-reqwest
//!
//! Remote event API adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`EventSource`](eventify_app::ports::EventSource) port
//!   against the REST endpoint `GET {base_url}/events`
//! - Forward only non-default filters as query parameters
//! - Treat the API's "nothing matched" 404 as an empty list
//! - Map transport, status and payload failures to [`SourceError`]
//!
//! ## Dependency rule
//! Depends on `eventify-app` (for port traits) and `eventify-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod config;
mod error;
mod source;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HttpSourceConfig};
pub use error::SourceError;
pub use source::HttpEventSource;
