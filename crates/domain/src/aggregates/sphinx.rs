//! Sphinx aggregate - collects riddles, eats heroes
//!
//! Riddles live in a FIFO [`BoundedQueue`]: past the limit the oldest riddle
//! is forgotten. Answers are matched against every riddle, in any order.

use crate::events::AnswerOutcome;
use crate::ids::CreatureId;
use crate::value_objects::{BestiarySettings, BoundedQueue, Capacity, CreatureName, PushOutcome, Riddle};

/// A nameless (by default) sphinx
///
/// # Example
///
/// ```
/// use bestiary_domain::aggregates::Sphinx;
/// use bestiary_domain::value_objects::Riddle;
///
/// let mut sphinx = Sphinx::new();
/// sphinx.collect_riddle(Riddle::new("What word becomes shorter when you add two letters to it?", "short").unwrap());
///
/// let reply = sphinx.attempt_answer("e");
/// assert_eq!(reply.to_string(), "Haha! Puny human, you look delicious");
/// assert_eq!(sphinx.heroes_eaten(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Sphinx {
    id: CreatureId,
    name: Option<CreatureName>,
    riddles: BoundedQueue<Riddle>,
    heroes_eaten: u32,
}

impl Default for Sphinx {
    fn default() -> Self {
        Self::new()
    }
}

impl Sphinx {
    pub const DEFAULT_RIDDLE_LIMIT: usize = 3;

    pub fn new() -> Self {
        Self {
            id: CreatureId::new(),
            name: None,
            riddles: BoundedQueue::fifo(Capacity::clamped(Self::DEFAULT_RIDDLE_LIMIT)),
            heroes_eaten: 0,
        }
    }

    /// Create a sphinx whose riddle limit comes from settings.
    pub fn configured(settings: &BestiarySettings) -> Self {
        Self::new().with_riddle_limit(settings.sphinx_riddle_capacity())
    }

    pub fn with_name(mut self, name: CreatureName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set a custom riddle limit. Collected riddles are discarded.
    pub fn with_riddle_limit(mut self, limit: Capacity) -> Self {
        self.riddles = BoundedQueue::fifo(limit);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn name(&self) -> Option<&CreatureName> {
        self.name.as_ref()
    }

    /// Riddles oldest first.
    pub fn riddles(&self) -> impl DoubleEndedIterator<Item = &Riddle> + ExactSizeIterator + '_ {
        self.riddles.iter()
    }

    pub fn riddle_limit(&self) -> Capacity {
        self.riddles.capacity()
    }

    #[inline]
    pub fn heroes_eaten(&self) -> u32 {
        self.heroes_eaten
    }

    // =========================================================================
    // Domain Methods
    // =========================================================================

    /// Remember `riddle`; past the limit the oldest one is forgotten.
    pub fn collect_riddle(&mut self, riddle: Riddle) -> PushOutcome<Riddle> {
        self.riddles.push(riddle)
    }

    /// Answer one of the sphinx's riddles.
    ///
    /// - Right answer: that riddle is removed. The sphinx mocks the hero, or
    ///   rages if it was the last riddle.
    /// - Wrong answer: the hero is eaten.
    pub fn attempt_answer(&mut self, answer: &str) -> AnswerOutcome {
        if self.riddles.remove_first(|r| r.is_answered_by(answer)).is_none() {
            self.heroes_eaten = self.heroes_eaten.saturating_add(1);
            tracing::debug!(heroes_eaten = self.heroes_eaten, "Sphinx ate a hero");
            return AnswerOutcome::AteHero {
                heroes_eaten: self.heroes_eaten,
            };
        }

        if self.riddles.is_empty() {
            AnswerOutcome::Raged {
                answer: answer.to_string(),
            }
        } else {
            AnswerOutcome::Mocked
        }
    }
}
