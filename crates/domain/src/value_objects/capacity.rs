//! Capacity and interval newtypes
//!
//! - [`Capacity`] bounds a holder's collection (statues, pack, riddles).
//! - [`Interval`] drives periodic behavior ("every 3rd encounter").
//!
//! Both are positive by construction, so a holder can never be built with
//! room for nothing and a modulo check can never divide by zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// Capacity
// ============================================================================

/// Maximum number of entries a bounded collection may hold (validated newtype)
///
/// # Examples
///
/// ```
/// use bestiary_domain::value_objects::Capacity;
///
/// let capacity = Capacity::new(3).unwrap();
/// assert_eq!(capacity.value(), 3);
///
/// assert!(Capacity::new(0).is_err());
/// assert_eq!(Capacity::clamped(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Capacity(usize);

impl Capacity {
    /// Minimum valid value: one entry
    pub const MIN: usize = 1;

    /// Create a new `Capacity`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is zero.
    pub fn new(value: usize) -> Result<Self, DomainError> {
        if value < Self::MIN {
            return Err(DomainError::validation(format!(
                "Capacity must be >= {}, got {}",
                Self::MIN,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a new `Capacity`, raising zero to the minimum.
    pub fn clamped(value: usize) -> Self {
        Self(value.max(Self::MIN))
    }

    /// Returns the raw capacity.
    #[inline]
    pub fn value(self) -> usize {
        self.0
    }

    /// Whether a collection of `len` entries has gone over this capacity.
    #[inline]
    pub fn is_exceeded_by(self, len: usize) -> bool {
        len > self.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for usize {
    fn from(capacity: Capacity) -> usize {
        capacity.0
    }
}

// ============================================================================
// Interval
// ============================================================================

/// A positive period for counter-driven behavior (validated newtype)
///
/// # Examples
///
/// ```
/// use bestiary_domain::value_objects::Interval;
///
/// let every_third = Interval::new(3).unwrap();
/// assert!(!every_third.is_due(0));
/// assert!(!every_third.is_due(2));
/// assert!(every_third.is_due(3));
/// assert!(every_third.is_due(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Interval(u32);

impl Interval {
    /// Minimum valid value: every time
    pub const MIN: u32 = 1;

    /// Create a new `Interval`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value < Self::MIN {
            return Err(DomainError::validation(format!(
                "Interval must be >= {}, got {}",
                Self::MIN,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a new `Interval`, raising zero to the minimum.
    pub fn clamped(value: u32) -> Self {
        Self(value.max(Self::MIN))
    }

    /// Returns the raw interval.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// True when `count` is a positive multiple of the interval.
    ///
    /// A count of zero is never due: nothing has happened yet.
    #[inline]
    pub fn is_due(self, count: u32) -> bool {
        count > 0 && count % self.0 == 0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {}", self.0)
    }
}

impl TryFrom<u32> for Interval {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Interval> for u32 {
    fn from(interval: Interval) -> u32 {
        interval.0
    }
}
