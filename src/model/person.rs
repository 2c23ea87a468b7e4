use super::GroupId;

/// A person with an ordered list of preferred groups.
///
/// Index 0 of `preferences` is the most preferred group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub(crate) name: String,
    pub(crate) preferences: Vec<GroupId>,
}

impl Person {
    pub(crate) fn new(name: impl Into<String>, preferences: Vec<GroupId>) -> Self {
        Self {
            name: name.into(),
            preferences,
        }
    }

    /// Unique name of the person.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preferred groups, most preferred first.
    pub fn preferences(&self) -> &[GroupId] {
        &self.preferences
    }

    /// Returns the 0-based rank of `group` in this person's preferences.
    pub fn rank_of(&self, group: GroupId) -> Option<usize> {
        self.preferences.iter().position(|g| *g == group)
    }

    /// Returns true if the person listed `group` anywhere.
    pub fn prefers(&self, group: GroupId) -> bool {
        self.preferences.contains(&group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_of_listed_and_unlisted_group() {
        let p = Person::new("p", vec![GroupId(2), GroupId(0)]);
        assert_eq!(p.rank_of(GroupId(2)), Some(0));
        assert_eq!(p.rank_of(GroupId(0)), Some(1));
        assert_eq!(p.rank_of(GroupId(1)), None);
        assert!(!p.prefers(GroupId(1)));
    }
}
