//! Domain entities - held creatures with identity
//!
//! Every entity here is a handle (`Rc` around its state). Holders keep
//! clones of the handle, never copies of the state, so a flag flipped by a
//! holder is visible through every handle.

mod human;
mod infant;
mod person;
mod stark;

pub use human::Human;
pub use infant::Infant;
pub use person::Person;
pub use stark::{Stark, DEFAULT_STARK_LOCATION};
