//! Aggregate roots - the holders
//!
//! Each aggregate:
//! - Has a unique identity
//! - Holds shared handles to the entities it acts on, never copies
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! | Holder | Held | Collection |
//! |--------|------|------------|
//! | [`Medusa`] | `Person` | FIFO, evicts oldest statue |
//! | [`Direwolf`] | `Stark` | location-guarded, refuses when full |
//! | [`Sphinx`] | `Riddle` values | FIFO, evicts oldest riddle |
//! | [`Fairy`] | `Infant` | unbounded wards |
//! | [`Ogre`] | `Human` | none, counters only |

pub mod direwolf;
pub mod fairy;
pub mod medusa;
pub mod ogre;
pub mod sphinx;

pub use direwolf::{Direwolf, DEFAULT_DIREWOLF_HOME, DEFAULT_DIREWOLF_SIZE};
pub use fairy::{Clothes, Disposition, Fairy, CHANGELING_DISPOSITION};
pub use medusa::Medusa;
pub use ogre::{Ogre, DEFAULT_OGRE_HOME};
pub use sphinx::Sphinx;
