//! # eventify-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **event listing** with the same query contract as the
//!   browser URL (`title`, `location`, `type`, `from`, `to`), and the
//!   **selector options** for the location and category filters
//! - Serve **pre-rendered detail pages** from the page cache, with the
//!   countdown evaluated at request time
//! - Stream **countdown snapshots** over Server-Sent Events
//! - Expose the **freshness check** and the **revalidation webhook**
//! - Map application errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `eventify-app` (for port traits and services) and `eventify-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
