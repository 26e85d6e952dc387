//! Domain Events
//!
//! Every mutation on a holder returns one of these enums, communicating what
//! happened when state was modified. Guard failures are outcomes, not
//! errors.

pub mod capture_events;
pub mod creature_events;

pub use capture_events::*;
pub use creature_events::*;
