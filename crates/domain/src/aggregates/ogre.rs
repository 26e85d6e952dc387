//! Ogre aggregate - chained counters across two creatures
//!
//! Every encounter bumps the human's counter. When the human notices the
//! ogre (every 3rd encounter by default) the ogre swings, and every 2nd
//! swing knocks the human out. An apology wakes them up.

use crate::entities::Human;
use crate::events::{EncounterOutcome, SwingOutcome};
use crate::ids::CreatureId;
use crate::value_objects::{BestiarySettings, CreatureName, Interval, PlaceName};

pub const DEFAULT_OGRE_HOME: &str = "Swamp";

/// An ogre with a club
#[derive(Debug, Clone)]
pub struct Ogre {
    id: CreatureId,
    name: CreatureName,
    home: PlaceName,
    swings: u32,
    knockout_interval: Interval,
}

impl Ogre {
    pub const DEFAULT_KNOCKOUT_INTERVAL: u32 = 2;

    pub fn new(name: CreatureName) -> Self {
        Self {
            id: CreatureId::new(),
            name,
            home: PlaceName::from_static(DEFAULT_OGRE_HOME),
            swings: 0,
            knockout_interval: Interval::clamped(Self::DEFAULT_KNOCKOUT_INTERVAL),
        }
    }

    /// Create an ogre whose knockout period comes from settings.
    pub fn configured(name: CreatureName, settings: &BestiarySettings) -> Self {
        Self::new(name).with_knockout_interval(settings.ogre_knockout_every())
    }

    pub fn with_home(mut self, home: PlaceName) -> Self {
        self.home = home;
        self
    }

    pub fn with_knockout_interval(mut self, interval: Interval) -> Self {
        self.knockout_interval = interval;
        self
    }

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

    #[inline]
    pub fn swings(&self) -> u32 {
        self.swings
    }

    #[inline]
    pub fn knockout_interval(&self) -> Interval {
        self.knockout_interval
    }

    /// Run into `human`. If they notice, swing at them.
    pub fn encounter(&mut self, human: &Human) -> EncounterOutcome {
        let encounters = human.record_encounter();
        if !human.notices_ogre() {
            return EncounterOutcome::Unnoticed { encounters };
        }
        let swing = self.swing_at(human);
        EncounterOutcome::Noticed { encounters, swing }
    }

    /// Swing the club. Every Nth swing knocks `human` out.
    pub fn swing_at(&mut self, human: &Human) -> SwingOutcome {
        self.swings = self.swings.saturating_add(1);
        if !self.knockout_interval.is_due(self.swings) {
            return SwingOutcome::Missed {
                swings: self.swings,
            };
        }
        human.set_knocked_out(true);
        tracing::debug!(ogre = %self.name, human = %human.name(), swings = self.swings, "Ogre knocked out human");
        SwingOutcome::KnockedOut {
            swings: self.swings,
        }
    }

    /// Say sorry; the human wakes up.
    pub fn apologize(&self, human: &Human) {
        human.set_knocked_out(false);
    }
}
