//! Entity model: persons, groups and the instance arena that owns them.
//!
//! Persons and groups reference each other through [`PersonId`] and [`GroupId`],
//! stable indices into the owning [`Instance`]. A person's assignment is never
//! stored on the person; it is derived from the member lists of the groups.

mod error;
mod group;
mod instance;
mod person;
pub mod snapshot;

pub use error::InstanceError;
pub use group::Group;
pub use instance::Instance;
pub use person::Person;
pub use snapshot::{GroupRecord, InstanceSnapshot, PersonRecord};

use std::fmt;

/// Index of a person inside its [`Instance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Index of a group inside its [`Instance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub(crate) usize);

impl GroupId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}
