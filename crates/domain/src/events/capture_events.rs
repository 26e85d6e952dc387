//! Capture-related domain events
//!
//! These enums communicate what happened when a holder tried to capture or
//! release a held entity. None of them are errors: a refused capture or a
//! release of something not held is a normal, silent outcome.

/// Why a capture left everything unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The holder's precondition (e.g. same location) did not hold
    GuardFailed,
    /// The holder was full and does not evict
    Full,
}

/// Outcome of capturing an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome<T> {
    /// Entity captured without going over capacity
    Captured,
    /// Entity captured; the oldest captive was released to make room
    CapturedWithEviction { evicted: T },
    /// Nothing changed
    Refused { reason: Refusal },
}

impl<T> CaptureOutcome<T> {
    /// Whether the entity is now held.
    pub fn is_captured(&self) -> bool {
        !matches!(self, Self::Refused { .. })
    }

    /// The captive released to make room, if any.
    pub fn evicted(&self) -> Option<&T> {
        match self {
            Self::CapturedWithEviction { evicted } => Some(evicted),
            _ => None,
        }
    }
}

/// Outcome of releasing an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Entity was held and has been released
    Released,
    /// Entity was not held; no effect
    NotHeld,
}

impl ReleaseOutcome {
    pub fn was_released(self) -> bool {
        matches!(self, Self::Released)
    }
}
