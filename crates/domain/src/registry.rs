//! Bounded cross-reference registry
//!
//! A holder keeps a [`CaptureRegistry`] of shared handles to held entities.
//! Capturing flips the entity's flag on and appends it; going over capacity
//! releases the oldest captive and flips its flag off. The flag lives on the
//! entity, so every handle (and every holder) sees the same value.
//!
//! # Flag policy
//!
//! Last writer wins. A release or eviction clears the flag even if another
//! holder, or another slot in the same registry, still references the
//! entity. There is no reference counting.

use crate::events::{CaptureOutcome, Refusal, ReleaseOutcome};
use crate::value_objects::{BoundedQueue, Capacity, OverflowPolicy, PushOutcome};

/// A held entity: a cheap, clonable handle with a shared capture flag
pub trait Captive: Clone {
    /// Write the shared flag (`stoned`, `safe`, ...).
    fn set_captured(&self, captured: bool);

    /// Read the shared flag.
    fn is_captured(&self) -> bool;

    /// Identity comparison: true when both handles point at one entity.
    fn is_same(&self, other: &Self) -> bool;

    /// Human-readable label for logging.
    fn label(&self) -> &str;
}

/// Fixed-capacity, insertion-ordered set of references to held entities
///
/// # Example
///
/// ```
/// use bestiary_domain::entities::Person;
/// use bestiary_domain::registry::{Captive, CaptureRegistry};
/// use bestiary_domain::value_objects::{Capacity, CreatureName};
///
/// let mut registry = CaptureRegistry::fifo(Capacity::new(1).unwrap());
/// let first = Person::new(CreatureName::new("First").unwrap());
/// let second = Person::new(CreatureName::new("Second").unwrap());
///
/// registry.capture(&first);
/// registry.capture(&second);
///
/// assert!(!first.is_captured());
/// assert!(second.is_captured());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CaptureRegistry<T: Captive> {
    captives: BoundedQueue<T>,
}

impl<T: Captive> CaptureRegistry<T> {
    pub fn new(capacity: Capacity, policy: OverflowPolicy) -> Self {
        Self {
            captives: BoundedQueue::new(capacity, policy),
        }
    }

    /// A registry that evicts its oldest captive when full.
    pub fn fifo(capacity: Capacity) -> Self {
        Self::new(capacity, OverflowPolicy::EvictOldest)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.captives.capacity()
    }

    #[inline]
    pub fn policy(&self) -> OverflowPolicy {
        self.captives.policy()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.captives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.captives.is_empty()
    }

    /// Iterates captives from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.captives.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.captives.get(index)
    }

    /// The oldest captive, next in line for eviction.
    pub fn front(&self) -> Option<&T> {
        self.captives.front()
    }

    pub fn contains(&self, entity: &T) -> bool {
        self.captives.iter().any(|held| held.is_same(entity))
    }

    /// How many slots reference `entity` (re-captures count twice).
    pub fn occurrences(&self, entity: &T) -> usize {
        self.captives.iter().filter(|held| held.is_same(entity)).count()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Capture `entity` unconditionally.
    ///
    /// Sets the entity's flag, appends it, and if that goes over capacity
    /// releases the oldest captive. Under `RejectNewest` a full registry
    /// refuses instead and nothing changes.
    pub fn capture(&mut self, entity: &T) -> CaptureOutcome<T> {
        self.capture_if(entity, |_| true)
    }

    /// Capture `entity` only if `guard` holds.
    ///
    /// A failed guard is a silent no-op: no flag change, no log.
    pub fn capture_if(&mut self, entity: &T, guard: impl FnOnce(&T) -> bool) -> CaptureOutcome<T> {
        if !guard(entity) {
            return CaptureOutcome::Refused {
                reason: Refusal::GuardFailed,
            };
        }

        match self.captives.push(entity.clone()) {
            PushOutcome::Rejected { .. } => CaptureOutcome::Refused {
                reason: Refusal::Full,
            },
            PushOutcome::Pushed => {
                entity.set_captured(true);
                tracing::trace!(entity = entity.label(), held = self.len(), "Captured");
                CaptureOutcome::Captured
            }
            PushOutcome::PushedWithEviction { evicted } => {
                entity.set_captured(true);
                evicted.set_captured(false);
                tracing::trace!(
                    entity = entity.label(),
                    evicted = evicted.label(),
                    "Captured, evicting oldest"
                );
                CaptureOutcome::CapturedWithEviction { evicted }
            }
        }
    }

    /// Release the first (oldest) slot referencing `entity`.
    ///
    /// Releasing something not held is a silent no-op.
    pub fn release(&mut self, entity: &T) -> ReleaseOutcome {
        match self.captives.remove_first(|held| held.is_same(entity)) {
            Some(released) => {
                released.set_captured(false);
                tracing::trace!(entity = released.label(), held = self.len(), "Released");
                ReleaseOutcome::Released
            }
            None => ReleaseOutcome::NotHeld,
        }
    }
}
