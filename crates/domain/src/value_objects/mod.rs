//! Value objects - Immutable objects defined by their attributes

mod bounded_queue;
mod capacity;
mod names;
mod riddle;
mod settings;

pub use bounded_queue::{BoundedQueue, OverflowPolicy, PushOutcome};
pub use capacity::{Capacity, Interval};
pub use names::{CreatureName, PlaceName};
pub use riddle::Riddle;
pub use settings::BestiarySettings;
