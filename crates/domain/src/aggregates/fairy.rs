//! Fairy aggregate - dust, dresses, and changelings
//!
//! A provoked fairy turns infants malicious in place and raises them as
//! wards. Every third ward (by default) calms her back down.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Infant;
use crate::error::DomainError;
use crate::events::ChangelingOutcome;
use crate::ids::CreatureId;
use crate::value_objects::{BestiarySettings, CreatureName, Interval};

/// Disposition written onto a replaced infant
pub const CHANGELING_DISPOSITION: &str = "Malicious";

/// Dust gained when someone else believes in the fairy
const BELIEF_DUST: u32 = 1;
/// Dust gained when the fairy believes in herself
const SELF_BELIEF_DUST: u32 = 10;

/// How a fairy currently feels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Disposition {
    #[default]
    GoodNatured,
    Vengeful,
}

impl Disposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoodNatured => "Good natured",
            Self::Vengeful => "Vengeful",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disposition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Good natured" => Ok(Self::GoodNatured),
            "Vengeful" => Ok(Self::Vengeful),
            other => Err(DomainError::parse(format!("Unknown fairy disposition: {}", other))),
        }
    }
}

/// A fairy's wardrobe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clothes {
    pub dresses: Vec<String>,
}

impl Default for Clothes {
    fn default() -> Self {
        Self {
            dresses: vec!["Iris".to_string()],
        }
    }
}

/// A fairy
#[derive(Debug, Clone)]
pub struct Fairy {
    id: CreatureId,
    name: CreatureName,
    dust: u32,
    clothes: Clothes,
    disposition: Disposition,
    human_wards: Vec<Infant>,
    calm_interval: Interval,
}

impl Fairy {
    pub const DEFAULT_DUST: u32 = 10;
    pub const DEFAULT_CALM_INTERVAL: u32 = 3;

    pub fn new(name: CreatureName) -> Self {
        Self {
            id: CreatureId::new(),
            name,
            dust: Self::DEFAULT_DUST,
            clothes: Clothes::default(),
            disposition: Disposition::GoodNatured,
            human_wards: Vec::new(),
            calm_interval: Interval::clamped(Self::DEFAULT_CALM_INTERVAL),
        }
    }

    /// Create a fairy whose starting dust and calm period come from settings.
    pub fn configured(name: CreatureName, settings: &BestiarySettings) -> Self {
        Self::new(name)
            .with_dust(settings.fairy_starting_dust)
            .with_calm_interval(settings.fairy_calm_every())
    }

    pub fn with_dust(mut self, dust: u32) -> Self {
        self.dust = dust;
        self
    }

    pub fn with_calm_interval(mut self, interval: Interval) -> Self {
        self.calm_interval = interval;
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

    #[inline]
    pub fn dust(&self) -> u32 {
        self.dust
    }

    pub fn clothes(&self) -> &Clothes {
        &self.clothes
    }

    #[inline]
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    pub fn human_wards(&self) -> &[Infant] {
        &self.human_wards
    }

    // =========================================================================
    // Domain Methods
    // =========================================================================

    pub fn receive_belief(&mut self) {
        self.dust = self.dust.saturating_add(BELIEF_DUST);
    }

    pub fn believe(&mut self) {
        self.dust = self.dust.saturating_add(SELF_BELIEF_DUST);
    }

    /// Turn each flower into a dress, keeping their order.
    pub fn make_dresses<I, S>(&mut self, flowers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clothes.dresses.extend(flowers.into_iter().map(Into::into));
    }

    pub fn provoke(&mut self) {
        self.disposition = Disposition::Vengeful;
    }

    /// Swap `infant` for a changeling if the fairy is vengeful.
    ///
    /// A vengeful fairy rewrites the infant's disposition to "Malicious" and
    /// keeps them as a ward. A good natured fairy leaves them alone. Either
    /// way the same infant handle comes back alongside the outcome.
    pub fn replace_infant(&mut self, infant: &Infant) -> (Infant, ChangelingOutcome) {
        if self.disposition != Disposition::Vengeful {
            return (infant.clone(), ChangelingOutcome::Untouched);
        }

        infant.set_disposition(CHANGELING_DISPOSITION);
        self.human_wards.push(infant.clone());
        let wards = self.human_wards.len();

        let ward_count = u32::try_from(wards).unwrap_or(u32::MAX);
        if self.calm_interval.is_due(ward_count) {
            self.disposition = Disposition::GoodNatured;
            tracing::debug!(fairy = %self.name, wards, "Fairy calmed down");
            return (infant.clone(), ChangelingOutcome::ReplacedAndCalmed { wards });
        }
        (infant.clone(), ChangelingOutcome::Replaced { wards })
    }
}
