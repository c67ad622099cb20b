//! # eventify-domain
//!
//! Pure domain model for the eventify event listing.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Events** (read-only records served by the remote event API)
//! - Define the **URL query contract** (`title`, `location`, `type`, `from`, `to`)
//! - Define **Filter state** and its mapping to and from the query string
//! - Define the **Countdown** calculation (upcoming → active → expired)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod countdown;
pub mod event;
pub mod filter;
pub mod location;
pub mod query;
