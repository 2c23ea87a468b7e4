use super::PersonId;

/// A group with size bounds and its current members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub(crate) name: String,
    pub(crate) min_size: usize,
    pub(crate) capacity: usize,
    pub(crate) members: Vec<PersonId>,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>, min_size: usize, capacity: usize) -> Self {
        Self {
            name: name.into(),
            min_size,
            capacity,
            members: Vec::new(),
        }
    }

    /// Unique name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fewest members the group may end up with.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Most members the group may hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current members in insertion order.
    pub fn members(&self) -> &[PersonId] {
        &self.members
    }

    /// Number of current members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if another member fits.
    pub fn has_room(&self) -> bool {
        self.members.len() < self.capacity
    }

    /// Returns true if the group has fewer members than its minimum size.
    pub fn is_undersized(&self) -> bool {
        self.members.len() < self.min_size
    }

    /// Returns true if the size lies within `[min_size, capacity]`.
    pub fn within_bounds(&self) -> bool {
        !self.is_undersized() && self.members.len() <= self.capacity
    }

    /// Returns true if `person` is a member.
    pub fn contains(&self, person: PersonId) -> bool {
        self.members.contains(&person)
    }

    /// Renders the group as `name (len/min-capacity)`.
    pub fn label(&self) -> String {
        format!(
            "{} ({}/{}-{})",
            self.name,
            self.members.len(),
            self.min_size,
            self.capacity
        )
    }

    pub(crate) fn remove_member(&mut self, person: PersonId) -> bool {
        match self.members.iter().position(|m| *m == person) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }
}
