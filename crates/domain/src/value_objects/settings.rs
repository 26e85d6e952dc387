//! Bestiary settings value object
//!
//! Every limit and period the creatures use lives here, with the curriculum
//! values as defaults. Settings can be overridden through `BESTIARY_*`
//! environment variables; missing or unparsable values fall back to the
//! defaults.

use serde::{Deserialize, Serialize};

use super::{Capacity, Interval};

/// All configurable creature limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestiarySettings {
    // ============================================================================
    // Bounded collections
    // ============================================================================
    /// How many statues a Medusa keeps before releasing the oldest
    #[serde(default = "default_medusa_statue_limit")]
    pub medusa_statue_limit: usize,

    /// How many Starks a Direwolf protects at once
    #[serde(default = "default_direwolf_pack_limit")]
    pub direwolf_pack_limit: usize,

    /// How many riddles a Sphinx remembers
    #[serde(default = "default_sphinx_riddle_limit")]
    pub sphinx_riddle_limit: usize,

    // ============================================================================
    // Periodic behavior
    // ============================================================================
    /// A Human notices the Ogre on every Nth encounter
    #[serde(default = "default_human_notice_interval")]
    pub human_notice_interval: u32,

    /// Every Nth swing of an Ogre's club knocks the Human out
    #[serde(default = "default_ogre_knockout_interval")]
    pub ogre_knockout_interval: u32,

    /// A vengeful Fairy calms down every Nth stolen infant
    #[serde(default = "default_fairy_calm_interval")]
    pub fairy_calm_interval: u32,

    // ============================================================================
    // Starting values
    // ============================================================================
    #[serde(default = "default_fairy_starting_dust")]
    pub fairy_starting_dust: u32,
}

fn default_medusa_statue_limit() -> usize { 3 }
fn default_direwolf_pack_limit() -> usize { 2 }
fn default_sphinx_riddle_limit() -> usize { 3 }
fn default_human_notice_interval() -> u32 { 3 }
fn default_ogre_knockout_interval() -> u32 { 2 }
fn default_fairy_calm_interval() -> u32 { 3 }
fn default_fairy_starting_dust() -> u32 { 10 }

impl Default for BestiarySettings {
    fn default() -> Self {
        Self {
            medusa_statue_limit: default_medusa_statue_limit(),
            direwolf_pack_limit: default_direwolf_pack_limit(),
            sphinx_riddle_limit: default_sphinx_riddle_limit(),
            human_notice_interval: default_human_notice_interval(),
            ogre_knockout_interval: default_ogre_knockout_interval(),
            fairy_calm_interval: default_fairy_calm_interval(),
            fairy_starting_dust: default_fairy_starting_dust(),
        }
    }
}

impl BestiarySettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, using defaults for missing values.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let settings = Self {
            medusa_statue_limit: lookup_or(&lookup, "BESTIARY_MEDUSA_STATUE_LIMIT", defaults.medusa_statue_limit),
            direwolf_pack_limit: lookup_or(&lookup, "BESTIARY_DIREWOLF_PACK_LIMIT", defaults.direwolf_pack_limit),
            sphinx_riddle_limit: lookup_or(&lookup, "BESTIARY_SPHINX_RIDDLE_LIMIT", defaults.sphinx_riddle_limit),
            human_notice_interval: lookup_or(&lookup, "BESTIARY_HUMAN_NOTICE_INTERVAL", defaults.human_notice_interval),
            ogre_knockout_interval: lookup_or(&lookup, "BESTIARY_OGRE_KNOCKOUT_INTERVAL", defaults.ogre_knockout_interval),
            fairy_calm_interval: lookup_or(&lookup, "BESTIARY_FAIRY_CALM_INTERVAL", defaults.fairy_calm_interval),
            fairy_starting_dust: lookup_or(&lookup, "BESTIARY_FAIRY_STARTING_DUST", defaults.fairy_starting_dust),
        };
        tracing::debug!(?settings, "Loaded bestiary settings");
        settings
    }

    // ============================================================================
    // Typed accessors (zero is raised to one)
    // ============================================================================

    pub fn medusa_statue_capacity(&self) -> Capacity {
        Capacity::clamped(self.medusa_statue_limit)
    }

    pub fn direwolf_pack_capacity(&self) -> Capacity {
        Capacity::clamped(self.direwolf_pack_limit)
    }

    pub fn sphinx_riddle_capacity(&self) -> Capacity {
        Capacity::clamped(self.sphinx_riddle_limit)
    }

    pub fn human_notice_every(&self) -> Interval {
        Interval::clamped(self.human_notice_interval)
    }

    pub fn ogre_knockout_every(&self) -> Interval {
        Interval::clamped(self.ogre_knockout_interval)
    }

    pub fn fairy_calm_every(&self) -> Interval {
        Interval::clamped(self.fairy_calm_interval)
    }
}

fn lookup_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
