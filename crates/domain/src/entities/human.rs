//! Human - the held side of an Ogre's attention

use std::cell::Cell;
use std::rc::Rc;

use crate::ids::HumanId;
use crate::value_objects::{BestiarySettings, CreatureName, Interval};

/// A human who keeps running into an ogre
///
/// The human owns the encounter counter and the `knocked_out` flag; the
/// ogre mutates both. Like the other held entities this is a shared handle.
#[derive(Debug, Clone)]
pub struct Human(Rc<HumanState>);

#[derive(Debug)]
struct HumanState {
    id: HumanId,
    name: CreatureName,
    encounter_counter: Cell<u32>,
    knocked_out: Cell<bool>,
    notice_interval: Cell<Interval>,
}

impl Human {
    /// Default period: the human notices the ogre every third encounter.
    pub const DEFAULT_NOTICE_INTERVAL: u32 = 3;

    pub fn new(name: CreatureName) -> Self {
        Self(Rc::new(HumanState {
            id: HumanId::new(),
            name,
            encounter_counter: Cell::new(0),
            knocked_out: Cell::new(false),
            notice_interval: Cell::new(Interval::clamped(Self::DEFAULT_NOTICE_INTERVAL)),
        }))
    }

    /// Create a human whose notice period comes from settings.
    pub fn configured(name: CreatureName, settings: &BestiarySettings) -> Self {
        Self::new(name).with_notice_interval(settings.human_notice_every())
    }

    pub fn with_notice_interval(self, interval: Interval) -> Self {
        self.0.notice_interval.set(interval);
        self
    }

    #[inline]
    pub fn id(&self) -> HumanId {
        self.0.id
    }

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.0.name
    }

    #[inline]
    pub fn encounter_counter(&self) -> u32 {
        self.0.encounter_counter.get()
    }

    #[inline]
    pub fn is_knocked_out(&self) -> bool {
        self.0.knocked_out.get()
    }

    #[inline]
    pub fn notice_interval(&self) -> Interval {
        self.0.notice_interval.get()
    }

    /// True on every Nth encounter (never before the first).
    pub fn notices_ogre(&self) -> bool {
        self.notice_interval().is_due(self.encounter_counter())
    }

    pub(crate) fn record_encounter(&self) -> u32 {
        let count = self.encounter_counter().saturating_add(1);
        self.0.encounter_counter.set(count);
        count
    }

    pub(crate) fn set_knocked_out(&self, knocked_out: bool) {
        self.0.knocked_out.set(knocked_out);
    }
}

impl PartialEq for Human {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Human {}

#[cfg(test)]
mod tests {
    use super::*;

    fn human() -> Human {
        Human::new(CreatureName::new("Jane").unwrap())
    }

    #[test]
    fn starts_with_zero_encounters_and_awake() {
        let jane = human();
        assert_eq!(jane.name().as_str(), "Jane");
        assert_eq!(jane.encounter_counter(), 0);
        assert!(!jane.is_knocked_out());
        assert!(!jane.notices_ogre());
    }

    #[test]
    fn notices_on_every_third_encounter() {
        let jane = human();
        let noticed: Vec<bool> = (0..6)
            .map(|_| {
                jane.record_encounter();
                jane.notices_ogre()
            })
            .collect();
        assert_eq!(noticed, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn configured_reads_notice_interval() {
        let settings = BestiarySettings {
            human_notice_interval: 4,
            ..BestiarySettings::default()
        };
        let jane = Human::configured(CreatureName::new("Jane").unwrap(), &settings);
        assert_eq!(jane.notice_interval().value(), 4);
    }

    #[test]
    fn custom_notice_interval() {
        let jane = human().with_notice_interval(Interval::new(2).unwrap());
        jane.record_encounter();
        assert!(!jane.notices_ogre());
        jane.record_encounter();
        assert!(jane.notices_ogre());
    }
}
