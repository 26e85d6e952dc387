pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod registry;
pub mod value_objects;

pub use aggregates::{Clothes, Direwolf, Disposition, Fairy, Medusa, Ogre, Sphinx};
pub use entities::{Human, Infant, Person, Stark};
pub use error::DomainError;
pub use events::{
    AnswerOutcome, CaptureOutcome, ChangelingOutcome, EncounterOutcome, Refusal, ReleaseOutcome,
    SwingOutcome,
};
pub use ids::{CreatureId, HumanId, InfantId, PersonId, StarkId};
pub use registry::{Captive, CaptureRegistry};
pub use value_objects::{
    BestiarySettings, BoundedQueue, Capacity, CreatureName, Interval, OverflowPolicy, PlaceName,
    PushOutcome, Riddle,
};
