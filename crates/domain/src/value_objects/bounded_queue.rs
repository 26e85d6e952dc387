//! Fixed-capacity FIFO queue
//!
//! A `VecDeque` with a [`Capacity`] and an [`OverflowPolicy`]. The overflow
//! check runs after every single push, so `len() <= capacity()` holds
//! between any two calls.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::Capacity;

/// What a full queue does with one more entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Accept the new entry and drop the oldest one (ring buffer semantics)
    #[default]
    EvictOldest,
    /// Leave the queue untouched and hand the new entry back
    RejectNewest,
}

/// Result of pushing onto a [`BoundedQueue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome<T> {
    /// Appended without going over capacity
    Pushed,
    /// Appended; the oldest entry was removed to make room
    PushedWithEviction { evicted: T },
    /// Queue was full under `RejectNewest`; the entry was not added
    Rejected { rejected: T },
}

impl<T> PushOutcome<T> {
    /// Whether the pushed entry ended up in the queue.
    pub fn was_accepted(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    /// The entry that fell out of the front, if any.
    pub fn evicted(&self) -> Option<&T> {
        match self {
            Self::PushedWithEviction { evicted } => Some(evicted),
            _ => None,
        }
    }
}

/// Insertion-ordered queue that never holds more than its capacity
///
/// # Example
///
/// ```
/// use bestiary_domain::value_objects::{BoundedQueue, Capacity, OverflowPolicy, PushOutcome};
///
/// let mut queue = BoundedQueue::new(Capacity::new(2).unwrap(), OverflowPolicy::EvictOldest);
/// queue.push("a");
/// queue.push("b");
///
/// assert_eq!(queue.push("c"), PushOutcome::PushedWithEviction { evicted: "a" });
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    entries: VecDeque<T>,
    capacity: Capacity,
    policy: OverflowPolicy,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue. Storage grows with the entries, not the capacity.
    pub fn new(capacity: Capacity, policy: OverflowPolicy) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            policy,
        }
    }

    /// Shorthand for an `EvictOldest` queue.
    pub fn fifo(capacity: Capacity) -> Self {
        Self::new(capacity, OverflowPolicy::EvictOldest)
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when one more push would overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity.value()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// The oldest entry (next to be evicted).
    pub fn front(&self) -> Option<&T> {
        self.entries.front()
    }

    /// The newest entry.
    pub fn back(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Append `entry`, then apply the overflow policy.
    ///
    /// Under `EvictOldest` at most one entry is evicted per push, because the
    /// queue can only ever be one over capacity.
    pub fn push(&mut self, entry: T) -> PushOutcome<T> {
        if self.policy == OverflowPolicy::RejectNewest && self.is_full() {
            return PushOutcome::Rejected { rejected: entry };
        }

        self.entries.push_back(entry);

        if self.capacity.is_exceeded_by(self.entries.len()) {
            if let Some(evicted) = self.entries.pop_front() {
                return PushOutcome::PushedWithEviction { evicted };
            }
        }
        PushOutcome::Pushed
    }

    /// Remove and return the first (oldest) entry matching `predicate`.
    pub fn remove_first(&mut self, predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.entries.iter().position(predicate)?;
        self.entries.remove(index)
    }

    /// Position of the first entry matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.entries.iter().position(predicate)
    }
}

impl<T: PartialEq> BoundedQueue<T> {
    pub fn contains(&self, entry: &T) -> bool {
        self.entries.contains(entry)
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(capacity: usize, policy: OverflowPolicy) -> BoundedQueue<u32> {
        BoundedQueue::new(Capacity::new(capacity).unwrap(), policy)
    }

    fn contents(queue: &BoundedQueue<u32>) -> Vec<u32> {
        queue.iter().copied().collect()
    }

    mod evict_oldest {
        use super::*;

        #[test]
        fn pushes_below_capacity_without_eviction() {
            let mut q = queue(3, OverflowPolicy::EvictOldest);
            assert_eq!(q.push(1), PushOutcome::Pushed);
            assert_eq!(q.push(2), PushOutcome::Pushed);
            assert_eq!(q.push(3), PushOutcome::Pushed);
            assert_eq!(contents(&q), vec![1, 2, 3]);
            assert!(q.is_full());
        }

        #[test]
        fn evicts_front_once_over_capacity() {
            let mut q = queue(3, OverflowPolicy::EvictOldest);
            for n in 1..=3 {
                q.push(n);
            }
            assert_eq!(q.push(4), PushOutcome::PushedWithEviction { evicted: 1 });
            assert_eq!(q.push(5), PushOutcome::PushedWithEviction { evicted: 2 });
            assert_eq!(contents(&q), vec![3, 4, 5]);
        }

        #[test]
        fn length_never_exceeds_capacity() {
            let mut q = queue(2, OverflowPolicy::EvictOldest);
            for n in 0..50 {
                q.push(n);
                assert!(q.len() <= 2);
            }
            assert_eq!(contents(&q), vec![48, 49]);
        }

        #[test]
        fn capacity_of_one_keeps_only_latest() {
            let mut q = queue(1, OverflowPolicy::EvictOldest);
            q.push(7);
            assert_eq!(q.push(8), PushOutcome::PushedWithEviction { evicted: 7 });
            assert_eq!(q.front(), Some(&8));
            assert_eq!(q.back(), Some(&8));
        }
    }

    mod reject_newest {
        use super::*;

        #[test]
        fn rejects_when_full_and_keeps_existing() {
            let mut q = queue(2, OverflowPolicy::RejectNewest);
            q.push(1);
            q.push(2);
            let outcome = q.push(3);
            assert_eq!(outcome, PushOutcome::Rejected { rejected: 3 });
            assert!(!outcome.was_accepted());
            assert_eq!(contents(&q), vec![1, 2]);
        }

        #[test]
        fn accepts_again_after_removal() {
            let mut q = queue(2, OverflowPolicy::RejectNewest);
            q.push(1);
            q.push(2);
            assert_eq!(q.remove_first(|n| *n == 1), Some(1));
            assert_eq!(q.push(3), PushOutcome::Pushed);
            assert_eq!(contents(&q), vec![2, 3]);
        }
    }

    mod removal {
        use super::*;

        #[test]
        fn remove_first_takes_oldest_match_only() {
            let mut q = queue(4, OverflowPolicy::EvictOldest);
            for n in [5, 6, 5, 7] {
                q.push(n);
            }
            assert_eq!(q.remove_first(|n| *n == 5), Some(5));
            assert_eq!(contents(&q), vec![6, 5, 7]);
        }

        #[test]
        fn remove_first_without_match_is_noop() {
            let mut q = queue(2, OverflowPolicy::EvictOldest);
            q.push(1);
            assert_eq!(q.remove_first(|n| *n == 9), None);
            assert_eq!(contents(&q), vec![1]);
        }
    }

    #[test]
    fn unbounded_capacity_does_not_allocate_up_front() {
        let mut q: BoundedQueue<u32> =
            BoundedQueue::fifo(Capacity::new(usize::MAX).unwrap());
        assert_eq!(q.push(1), PushOutcome::Pushed);
        assert_eq!(q.push(2), PushOutcome::Pushed);
        assert!(!q.is_full());
        assert_eq!(contents(&q), vec![1, 2]);
    }

    #[test]
    fn policy_serializes_snake_case() {
        let json = serde_json::to_string(&OverflowPolicy::RejectNewest).unwrap();
        assert_eq!(json, "\"reject_newest\"");
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::EvictOldest);
    }
}
