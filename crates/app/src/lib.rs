//! # eventify-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EventSource` — read events from the remote API
//!   - `Navigator` — rewrite the URL query (replace or push)
//!   - `Revalidator` — refresh cached content for one detail path
//!   - `Clock` — current wall-clock time
//! - Keep filter state and the URL in sync (`FilterSync`, driven by
//!   `FilterSession` on a tokio task), debouncing free-text input
//! - Re-evaluate countdowns on a fixed tick (`CountdownTicker`)
//! - Provide the catalog use-cases (`EventService`, `ContentUpdateService`)
//!   and the detail page cache (`PageCache`)
//!
//! ## Dependency rule
//! Depends on `eventify-domain` only (plus `tokio` for timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod countdown_ticker;
pub mod debounce;
pub mod filter_session;
pub mod filter_sync;
pub mod history;
pub mod page_cache;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
