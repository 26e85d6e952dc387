//! Creature-specific domain events
//!
//! Returned from Ogre, Sphinx and Fairy mutations so callers can react to
//! what happened without re-reading state.

use std::fmt;

/// Outcome of an Ogre swinging its club
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingOutcome {
    /// The swing did not land
    Missed { swings: u32 },
    /// The swing knocked the human out
    KnockedOut { swings: u32 },
}

/// Outcome of an Ogre encountering a Human
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// The human did not notice the ogre
    Unnoticed { encounters: u32 },
    /// The human noticed, so the ogre swung
    Noticed { encounters: u32, swing: SwingOutcome },
}

/// Outcome of answering a Sphinx's riddle
///
/// `Display` renders what the Sphinx says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct, and riddles remain
    Mocked,
    /// Correct, and that was the last riddle
    Raged { answer: String },
    /// Wrong; the hero was eaten
    AteHero { heroes_eaten: u32 },
}

impl fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mocked => write!(f, "That wasn't that hard, I bet you don't get the next one"),
            Self::Raged { answer } => write!(
                f,
                "PSSSSSSS THIS HAS NEVER HAPPENED, HOW DID YOU KNOW THE ANSWER WAS \"{}\"???",
                answer
            ),
            Self::AteHero { .. } => write!(f, "Haha! Puny human, you look delicious"),
        }
    }
}

/// Outcome of a Fairy attempting to swap an infant for a changeling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelingOutcome {
    /// The fairy was good natured; the infant is untouched
    Untouched,
    /// The infant turned malicious and joined the fairy's wards
    Replaced { wards: usize },
    /// As `Replaced`, and the fairy calmed back down
    ReplacedAndCalmed { wards: usize },
}
