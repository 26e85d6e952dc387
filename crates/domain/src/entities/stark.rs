//! Stark - the held side of a Direwolf's protection

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::ids::StarkId;
use crate::registry::Captive;
use crate::value_objects::{CreatureName, PlaceName};

/// Where a Stark is unless told otherwise
pub const DEFAULT_STARK_LOCATION: &str = "Winterfell";

/// A member of House Stark
///
/// A handle like [`Person`](super::Person): clones share location and
/// safety.
///
/// # Example
///
/// ```
/// use bestiary_domain::entities::Stark;
/// use bestiary_domain::value_objects::{CreatureName, PlaceName};
///
/// let arya = Stark::new(CreatureName::new("Arya").unwrap())
///     .with_location(PlaceName::new("Dorn").unwrap());
///
/// assert_eq!(arya.location().as_str(), "Dorn");
/// assert_eq!(arya.house_words(), "Winter is Coming");
/// ```
#[derive(Debug, Clone)]
pub struct Stark(Rc<StarkState>);

#[derive(Debug)]
struct StarkState {
    id: StarkId,
    name: CreatureName,
    location: RefCell<PlaceName>,
    safe: Cell<bool>,
}

impl Stark {
    /// Create a Stark at Winterfell, not yet safe.
    pub fn new(name: CreatureName) -> Self {
        Self(Rc::new(StarkState {
            id: StarkId::new(),
            name,
            location: RefCell::new(PlaceName::from_static(DEFAULT_STARK_LOCATION)),
            safe: Cell::new(false),
        }))
    }

    /// Set the Stark's starting location.
    pub fn with_location(self, location: PlaceName) -> Self {
        self.move_to(location);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> StarkId {
        self.0.id
    }

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.0.name
    }

    pub fn location(&self) -> PlaceName {
        self.0.location.borrow().clone()
    }

    pub fn is_at(&self, place: &PlaceName) -> bool {
        *self.0.location.borrow() == *place
    }

    #[inline]
    pub fn is_safe(&self) -> bool {
        self.0.safe.get()
    }

    /// What the Stark says, depending on whether a direwolf has their back.
    pub fn house_words(&self) -> &'static str {
        if self.is_safe() {
            "The North Remembers"
        } else {
            "Winter is Coming"
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Travel somewhere else. Protection already granted is not revoked.
    pub fn move_to(&self, location: PlaceName) {
        *self.0.location.borrow_mut() = location;
    }
}

impl PartialEq for Stark {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Stark {}

impl Captive for Stark {
    fn set_captured(&self, captured: bool) {
        self.0.safe.set(captured);
    }

    fn is_captured(&self) -> bool {
        self.is_safe()
    }

    fn is_same(&self, other: &Self) -> bool {
        self == other
    }

    fn label(&self) -> &str {
        self.0.name.as_str()
    }
}
