//! Medusa aggregate - turns people to stone, keeps a few statues
//!
//! The canonical bounded cross-reference holder: statues are a FIFO
//! [`CaptureRegistry`] of [`Person`] handles. The fourth stare (with the
//! default limit) frees the oldest statue.

use crate::entities::Person;
use crate::events::{CaptureOutcome, ReleaseOutcome};
use crate::ids::CreatureId;
use crate::registry::CaptureRegistry;
use crate::value_objects::{BestiarySettings, Capacity, CreatureName};

/// A Medusa and her statues
///
/// # Invariants
///
/// - `statue_count() <= statue_limit()` after every call
/// - every person in `statues()` was stoned by the stare that put them there
///
/// # Example
///
/// ```
/// use bestiary_domain::aggregates::Medusa;
/// use bestiary_domain::entities::Person;
/// use bestiary_domain::value_objects::CreatureName;
///
/// let mut medusa = Medusa::new(CreatureName::new("Cassiopeia").unwrap());
/// let victims: Vec<Person> = ["1", "2", "3", "4"]
///     .into_iter()
///     .map(|n| Person::new(CreatureName::new(n).unwrap()))
///     .collect();
///
/// for victim in &victims {
///     medusa.stare(victim);
/// }
///
/// assert_eq!(medusa.statue_count(), 3);
/// assert!(!victims[0].is_stoned());
/// assert!(victims[3].is_stoned());
/// ```
#[derive(Debug, Clone)]
pub struct Medusa {
    id: CreatureId,
    name: CreatureName,
    statues: CaptureRegistry<Person>,
}

impl Medusa {
    pub const DEFAULT_STATUE_LIMIT: usize = 3;

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a Medusa with no statues and the default limit of three.
    pub fn new(name: CreatureName) -> Self {
        Self {
            id: CreatureId::new(),
            name,
            statues: CaptureRegistry::fifo(Capacity::clamped(Self::DEFAULT_STATUE_LIMIT)),
        }
    }

    /// Create a Medusa whose statue limit comes from settings.
    pub fn configured(name: CreatureName, settings: &BestiarySettings) -> Self {
        Self::new(name).with_statue_limit(settings.medusa_statue_capacity())
    }

    /// Set a custom statue limit. Existing statues are discarded.
    pub fn with_statue_limit(mut self, limit: Capacity) -> Self {
        self.statues = CaptureRegistry::fifo(limit);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.name
    }

    /// Statues in the order they were made, oldest first.
    pub fn statues(&self) -> impl DoubleEndedIterator<Item = &Person> + ExactSizeIterator + '_ {
        self.statues.iter()
    }

    pub fn statue_count(&self) -> usize {
        self.statues.len()
    }

    pub fn statue_limit(&self) -> Capacity {
        self.statues.capacity()
    }

    pub fn has_statue(&self, person: &Person) -> bool {
        self.statues.contains(person)
    }

    // =========================================================================
    // Domain Methods
    // =========================================================================

    /// Turn `victim` to stone and add them to the statues.
    ///
    /// If that goes over the limit, the oldest statue is freed and returned
    /// in the outcome. Staring at someone already a statue adds a second
    /// slot for them.
    pub fn stare(&mut self, victim: &Person) -> CaptureOutcome<Person> {
        let outcome = self.statues.capture(victim);
        tracing::debug!(
            medusa = %self.name,
            victim = %victim.name(),
            released = ?outcome.evicted().map(|p| p.name().as_str()),
            "Medusa stared"
        );
        outcome
    }

    /// Free `person` from stone. No effect if they are not a statue here.
    pub fn release(&mut self, person: &Person) -> ReleaseOutcome {
        self.statues.release(person)
    }
}
