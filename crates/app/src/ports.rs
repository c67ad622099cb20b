//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod clock;
pub mod event_source;
pub mod navigator;
pub mod revalidator;

pub use clock::{Clock, SystemClock};
pub use event_source::EventSource;
pub use navigator::Navigator;
pub use revalidator::Revalidator;
