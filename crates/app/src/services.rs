//! Application services — catalog use-cases.
//!
//! Services take their ports as generic parameters (constructor injection)
//! and never name a concrete adapter.

pub mod content_update;
pub mod event_service;
