use thiserror::Error;

/// Errors raised while building or editing an [`Instance`](super::Instance).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("Group name already exists: {0}")]
    DuplicateGroupName(String),

    #[error("Person name already exists: {0}")]
    DuplicatePersonName(String),

    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Person {person} lists group {group} more than once")]
    DuplicatePreference { person: String, group: String },

    #[error("Group {name} has capacity {capacity} below its minimum size {min_size}")]
    CapacityBelowMinimum {
        name: String,
        min_size: usize,
        capacity: usize,
    },

    #[error("Group {0} is already full")]
    GroupFull(String),

    #[error("Person {person} is already a member of group {group}")]
    AlreadyInGroup { person: String, group: String },

    #[error("Person index out of range: {0}")]
    PersonIndexOutOfRange(usize),

    #[error("Group index out of range: {0}")]
    GroupIndexOutOfRange(usize),
}
