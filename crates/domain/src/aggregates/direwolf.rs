//! Direwolf aggregate - protects Starks at its home
//!
//! The guarded variant of the capture registry:
//! - `protect` only works when the Stark is at the direwolf's home
//! - a full pack refuses newcomers instead of abandoning anyone
//! - `leave` reverses protection
//!
//! Both guards are silent: a refused Stark simply stays unsafe.

use crate::entities::Stark;
use crate::events::{CaptureOutcome, ReleaseOutcome};
use crate::ids::CreatureId;
use crate::registry::CaptureRegistry;
use crate::value_objects::{BestiarySettings, Capacity, CreatureName, OverflowPolicy, PlaceName};

pub const DEFAULT_DIREWOLF_HOME: &str = "Beyond the Wall";
pub const DEFAULT_DIREWOLF_SIZE: &str = "Massive";

/// A direwolf and the Starks it protects
///
/// # Example
///
/// ```
/// use bestiary_domain::aggregates::Direwolf;
/// use bestiary_domain::entities::Stark;
/// use bestiary_domain::value_objects::{CreatureName, PlaceName};
///
/// let dorn = PlaceName::new("Dorn").unwrap();
/// let mut nymeria = Direwolf::new(CreatureName::new("Nymeria").unwrap()).with_home(dorn.clone());
/// let arya = Stark::new(CreatureName::new("Arya").unwrap()).with_location(dorn);
///
/// nymeria.protect(&arya);
///
/// assert!(arya.is_safe());
/// assert!(!nymeria.hunts_white_walkers());
/// ```
#[derive(Debug, Clone)]
pub struct Direwolf {
    id: CreatureId,
    name: CreatureName,
    home: PlaceName,
    size: String,
    starks_to_protect: CaptureRegistry<Stark>,
}

impl Direwolf {
    pub const DEFAULT_PACK_LIMIT: usize = 2;

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a massive direwolf living Beyond the Wall, protecting no one.
    pub fn new(name: CreatureName) -> Self {
        Self {
            id: CreatureId::new(),
            name,
            home: PlaceName::from_static(DEFAULT_DIREWOLF_HOME),
            size: DEFAULT_DIREWOLF_SIZE.to_string(),
            starks_to_protect: Self::pack(Capacity::clamped(Self::DEFAULT_PACK_LIMIT)),
        }
    }

    /// Create a direwolf whose pack limit comes from settings.
    pub fn configured(name: CreatureName, settings: &BestiarySettings) -> Self {
        Self::new(name).with_pack_limit(settings.direwolf_pack_capacity())
    }

    pub fn with_home(mut self, home: PlaceName) -> Self {
        self.home = home;
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set a custom pack limit. Existing protection is discarded.
    pub fn with_pack_limit(mut self, limit: Capacity) -> Self {
        self.starks_to_protect = Self::pack(limit);
        self
    }

    fn pack(limit: Capacity) -> CaptureRegistry<Stark> {
        CaptureRegistry::new(limit, OverflowPolicy::RejectNewest)
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

    #[inline]
    pub fn home(&self) -> &PlaceName {
        &self.home
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    /// Protected Starks, in the order protection began.
    pub fn starks_to_protect(&self) -> impl DoubleEndedIterator<Item = &Stark> + ExactSizeIterator + '_ {
        self.starks_to_protect.iter()
    }

    pub fn pack_limit(&self) -> Capacity {
        self.starks_to_protect.capacity()
    }

    pub fn is_protecting(&self, stark: &Stark) -> bool {
        self.starks_to_protect.contains(stark)
    }

    /// A direwolf with nobody to protect goes hunting.
    pub fn hunts_white_walkers(&self) -> bool {
        self.starks_to_protect.is_empty()
    }

    // =========================================================================
    // Domain Methods
    // =========================================================================

    /// Protect `stark`, making them safe.
    ///
    /// Refused silently when the Stark is somewhere else or the pack is
    /// full.
    pub fn protect(&mut self, stark: &Stark) -> CaptureOutcome<Stark> {
        let home = &self.home;
        let outcome = self.starks_to_protect.capture_if(stark, |s| s.is_at(home));
        if outcome.is_captured() {
            tracing::debug!(direwolf = %self.name, stark = %stark.name(), "Direwolf protecting Stark");
        }
        outcome
    }

    /// Stop protecting `stark`, making them unsafe. No effect if the
    /// direwolf was not protecting them.
    pub fn leave(&mut self, stark: &Stark) -> ReleaseOutcome {
        let outcome = self.starks_to_protect.release(stark);
        if outcome.was_released() {
            tracing::debug!(direwolf = %self.name, stark = %stark.name(), "Direwolf left Stark");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Refusal;

    fn place(name: &str) -> PlaceName {
        PlaceName::new(name).unwrap()
    }

    fn direwolf(name: &str) -> Direwolf {
        Direwolf::new(CreatureName::new(name).unwrap())
    }

    fn direwolf_at(name: &str, home: &str) -> Direwolf {
        direwolf(name).with_home(place(home))
    }

    fn stark(name: &str) -> Stark {
        Stark::new(CreatureName::new(name).unwrap())
    }

    fn stark_at(name: &str, location: &str) -> Stark {
        stark(name).with_location(place(location))
    }

    fn protected_names(direwolf: &Direwolf) -> Vec<String> {
        direwolf
            .starks_to_protect()
            .map(|s| s.name().to_string())
            .collect()
    }

    mod creation {
        use super::*;

        #[test]
        fn direwolf_defaults() {
            let ghost = direwolf("Ghost");
            assert_eq!(ghost.name().as_str(), "Ghost");
            assert_eq!(ghost.home().as_str(), "Beyond the Wall");
            assert_eq!(ghost.size(), "Massive");
            assert_eq!(ghost.pack_limit().value(), 2);
            assert_eq!(ghost.starks_to_protect().len(), 0);
        }

        #[test]
        fn direwolf_can_have_custom_home_and_size() {
            let shaggydog = direwolf("Shaggydog")
                .with_home(place("Karhold"))
                .with_size("Smol Pupper");
            assert_eq!(shaggydog.name().as_str(), "Shaggydog");
            assert_eq!(shaggydog.home().as_str(), "Karhold");
            assert_eq!(shaggydog.size(), "Smol Pupper");
        }
    }

    mod protect {
        use super::*;

        #[test]
        fn protects_stark_at_same_location() {
            let mut nymeria = direwolf_at("Nymeria", "Riverlands");
            let arya = stark_at("Arya", "Riverlands");

            assert_eq!(nymeria.protect(&arya), CaptureOutcome::Captured);

            assert_eq!(protected_names(&nymeria), vec!["Arya"]);
            assert!(arya.is_safe());
        }

        #[test]
        fn only_protects_if_locations_match() {
            let mut ghost = direwolf("Ghost");
            let john = stark_at("John", "King's Landing");

            let outcome = ghost.protect(&john);

            assert_eq!(
                outcome,
                CaptureOutcome::Refused {
                    reason: Refusal::GuardFailed
                }
            );
            assert_eq!(ghost.starks_to_protect().len(), 0);
            assert!(!john.is_safe());
        }

        #[test]
        fn protects_max_two_starks() {
            let mut summer = direwolf_at("Summer", "Winterfell");
            let mut grey_wind = direwolf_at("Grey Wind", "Winterfell");
            let sansa = stark_at("Sansa", "Winterfell");
            let john = stark_at("John", "Winterfell");
            let rob = stark_at("Rob", "Winterfell");
            let bran = stark_at("Bran", "Winterfell");
            let arya = stark_at("Arya", "Winterfell");

            summer.protect(&sansa);
            summer.protect(&john);

            grey_wind.protect(&rob);
            grey_wind.protect(&bran);
            let outcome = grey_wind.protect(&arya);

            assert_eq!(protected_names(&summer), vec!["Sansa", "John"]);
            assert_eq!(protected_names(&grey_wind), vec!["Rob", "Bran"]);
            assert_eq!(outcome, CaptureOutcome::Refused { reason: Refusal::Full });
            assert!(rob.is_safe() && bran.is_safe());
            assert!(!arya.is_safe());
        }

        #[test]
        fn safe_stark_says_north_remembers() {
            let mut nymeria = direwolf_at("Nymeria", "Dorn");
            let arya = stark_at("Arya", "Dorn");

            nymeria.protect(&arya);

            assert_eq!(arya.house_words(), "The North Remembers");
        }

        #[test]
        fn stark_that_travels_home_can_then_be_protected() {
            let mut lady = direwolf_at("Lady", "Winterfell");
            let sansa = stark_at("Sansa", "King's Landing");

            lady.protect(&sansa);
            assert!(!sansa.is_safe());

            sansa.move_to(place("Winterfell"));
            lady.protect(&sansa);
            assert!(sansa.is_safe());
        }

        #[test]
        fn stark_who_wanders_off_stays_protected() {
            let mut summer = direwolf_at("Summer", "Winterfell");
            let bran = stark_at("Bran", "Winterfell");

            summer.protect(&bran);
            bran.move_to(place("The Wall"));

            assert_eq!(bran.location().as_str(), "The Wall");
            assert!(bran.is_safe());
            assert!(summer.is_protecting(&bran));
            assert_eq!(bran.house_words(), "The North Remembers");
        }
    }

    mod hunting {
        use super::*;

        #[test]
        fn hunts_when_not_protecting() {
            let nymeria = direwolf_at("Nymeria", "Winterfell");
            assert!(nymeria.hunts_white_walkers());
        }

        #[test]
        fn stops_hunting_when_protecting() {
            let mut nymeria = direwolf_at("Nymeria", "Winterfell");
            let sansa = stark("Sansa");

            nymeria.protect(&sansa);

            assert!(!nymeria.hunts_white_walkers());
        }
    }

    mod leave {
        use super::*;

        #[test]
        fn direwolf_can_leave_stark() {
            let mut summer = direwolf_at("Summer", "Winterfell");
            let mut lady = direwolf_at("Lady", "Winterfell");
            let sansa = stark("Sansa");
            let arya = stark("Arya");

            summer.protect(&arya);
            assert!(arya.is_safe());

            lady.protect(&sansa);
            assert_eq!(summer.leave(&arya), ReleaseOutcome::Released);

            assert_eq!(summer.starks_to_protect().len(), 0);
            assert_eq!(protected_names(&lady), vec!["Sansa"]);
            assert!(!arya.is_safe());
            assert!(summer.hunts_white_walkers());
        }

        #[test]
        fn leaving_unprotected_stark_is_silent() {
            let mut summer = direwolf_at("Summer", "Winterfell");
            let mut lady = direwolf_at("Lady", "Winterfell");
            let sansa = stark("Sansa");

            lady.protect(&sansa);

            assert_eq!(summer.leave(&sansa), ReleaseOutcome::NotHeld);
            assert!(sansa.is_safe());
            assert!(lady.is_protecting(&sansa));
        }

        #[test]
        fn leaving_frees_a_slot_in_a_full_pack() {
            let mut grey_wind = direwolf_at("Grey Wind", "Winterfell");
            let (rob, bran, arya) = (stark("Rob"), stark("Bran"), stark("Arya"));

            grey_wind.protect(&rob);
            grey_wind.protect(&bran);
            grey_wind.leave(&rob);
            grey_wind.protect(&arya);

            assert_eq!(protected_names(&grey_wind), vec!["Bran", "Arya"]);
            assert!(!rob.is_safe());
            assert!(arya.is_safe());
        }
    }

    #[test]
    fn configured_reads_pack_limit() {
        let settings = BestiarySettings {
            direwolf_pack_limit: 3,
            ..BestiarySettings::default()
        };
        let ghost = Direwolf::configured(CreatureName::new("Ghost").unwrap(), &settings);
        assert_eq!(ghost.pack_limit().value(), 3);
    }
}
