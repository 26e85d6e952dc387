//! Person - the held side of Medusa's stare

use std::cell::Cell;
use std::rc::Rc;

use crate::ids::PersonId;
use crate::registry::Captive;
use crate::value_objects::CreatureName;

/// A person who may be turned to stone
///
/// `Person` is a handle: cloning it shares the same person, so a Medusa's
/// statue and the caller's variable always agree on `is_stoned()`.
///
/// # Example
///
/// ```
/// use bestiary_domain::entities::Person;
/// use bestiary_domain::value_objects::CreatureName;
///
/// let perseus = Person::new(CreatureName::new("Perseus").unwrap());
/// let same = perseus.clone();
///
/// assert_eq!(perseus, same);
/// assert!(!perseus.is_stoned());
/// ```
#[derive(Debug, Clone)]
pub struct Person(Rc<PersonState>);

#[derive(Debug)]
struct PersonState {
    id: PersonId,
    name: CreatureName,
    stoned: Cell<bool>,
}

impl Person {
    pub fn new(name: CreatureName) -> Self {
        Self(Rc::new(PersonState {
            id: PersonId::new(),
            name,
            stoned: Cell::new(false),
        }))
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.0.id
    }

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.0.name
    }

    #[inline]
    pub fn is_stoned(&self) -> bool {
        self.0.stoned.get()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Person {}

impl Captive for Person {
    fn set_captured(&self, captured: bool) {
        self.0.stoned.set(captured);
    }

    fn is_captured(&self) -> bool {
        self.is_stoned()
    }

    fn is_same(&self, other: &Self) -> bool {
        self == other
    }

    fn label(&self) -> &str {
        self.0.name.as_str()
    }
}
