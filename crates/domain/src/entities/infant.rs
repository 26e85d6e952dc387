//! Infant - what a vengeful Fairy swaps for a changeling

use std::cell::RefCell;
use std::rc::Rc;

use crate::ids::InfantId;
use crate::value_objects::CreatureName;

/// A human infant
///
/// The fairy rewrites the infant's disposition in place, so the caller's
/// handle sees the change.
#[derive(Debug, Clone)]
pub struct Infant(Rc<InfantState>);

#[derive(Debug)]
struct InfantState {
    id: InfantId,
    name: CreatureName,
    eyes: String,
    disposition: RefCell<String>,
}

impl Infant {
    pub fn new(name: CreatureName, eyes: impl Into<String>, disposition: impl Into<String>) -> Self {
        Self(Rc::new(InfantState {
            id: InfantId::new(),
            name,
            eyes: eyes.into(),
            disposition: RefCell::new(disposition.into()),
        }))
    }

    #[inline]
    pub fn id(&self) -> InfantId {
        self.0.id
    }

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.0.name
    }

    pub fn eyes(&self) -> &str {
        &self.0.eyes
    }

    pub fn disposition(&self) -> String {
        self.0.disposition.borrow().clone()
    }

    pub(crate) fn set_disposition(&self, disposition: impl Into<String>) {
        *self.0.disposition.borrow_mut() = disposition.into();
    }
}

impl PartialEq for Infant {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Infant {}
