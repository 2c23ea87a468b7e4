use super::{Group, GroupId, InstanceError, Person, PersonId};

/// Arena of persons and groups forming one matching problem.
///
/// Ids handed out by [`Instance::add_group`] and [`Instance::add_person`] stay
/// valid until the instance is pruned by the feasibility check, which removes
/// groups and renumbers the remaining [`GroupId`]s.
///
/// # Examples
///
/// ```
/// use group_matcher::model::Instance;
///
/// let mut instance = Instance::new();
/// let a = instance.add_group("A", 1, 2).unwrap();
/// let b = instance.add_group("B", 0, 2).unwrap();
/// let alice = instance.add_person("alice", vec![a, b]).unwrap();
///
/// instance.assign(alice, b).unwrap();
/// assert_eq!(instance.group_of(alice), Some(b));
/// assert_eq!(instance.group(b).label(), "B (1/0-2)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub(crate) persons: Vec<Person>,
    pub(crate) groups: Vec<Group>,
}

impl Instance {
    /// Creates an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty group.
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        min_size: usize,
        capacity: usize,
    ) -> Result<GroupId, InstanceError> {
        let name = name.into();
        if self.find_group(&name).is_some() {
            return Err(InstanceError::DuplicateGroupName(name));
        }
        if capacity < min_size {
            return Err(InstanceError::CapacityBelowMinimum {
                name,
                min_size,
                capacity,
            });
        }
        self.groups.push(Group::new(name, min_size, capacity));
        Ok(GroupId(self.groups.len() - 1))
    }

    /// Adds an unassigned person with the given ranked preferences.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        preferences: Vec<GroupId>,
    ) -> Result<PersonId, InstanceError> {
        let name = name.into();
        if self.find_person(&name).is_some() {
            return Err(InstanceError::DuplicatePersonName(name));
        }
        for (rank, group) in preferences.iter().enumerate() {
            let Some(g) = self.groups.get(group.0) else {
                return Err(InstanceError::GroupIndexOutOfRange(group.0));
            };
            if preferences[..rank].contains(group) {
                return Err(InstanceError::DuplicatePreference {
                    person: name,
                    group: g.name.clone(),
                });
            }
        }
        self.persons.push(Person::new(name, preferences));
        Ok(PersonId(self.persons.len() - 1))
    }

    /// Adds a person whose preferences are given by group name.
    pub fn add_person_with_names(
        &mut self,
        name: impl Into<String>,
        preferences: &[&str],
    ) -> Result<PersonId, InstanceError> {
        let preferences = preferences
            .iter()
            .map(|g| {
                self.find_group(g)
                    .ok_or_else(|| InstanceError::UnknownGroup(g.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.add_person(name, preferences)
    }

    /// All persons, indexed by [`PersonId`].
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// All groups, indexed by [`GroupId`].
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this instance.
    pub fn person(&self, id: PersonId) -> &Person {
        &self.persons[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this instance.
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.0]
    }

    /// Ids of all persons in index order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.persons.len()).map(PersonId)
    }

    /// Ids of all groups in index order.
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> + '_ {
        (0..self.groups.len()).map(GroupId)
    }

    /// Looks up a group by name.
    pub fn find_group(&self, name: &str) -> Option<GroupId> {
        self.groups.iter().position(|g| g.name == name).map(GroupId)
    }

    /// Looks up a person by name.
    pub fn find_person(&self, name: &str) -> Option<PersonId> {
        self.persons.iter().position(|p| p.name == name).map(PersonId)
    }

    /// Returns the group currently holding `person`, if any.
    pub fn group_of(&self, person: PersonId) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|g| g.contains(person))
            .map(GroupId)
    }

    /// Persons that are a member of some group.
    pub fn assigned_persons(&self) -> Vec<PersonId> {
        self.person_ids()
            .filter(|p| self.group_of(*p).is_some())
            .collect()
    }

    /// Persons that are a member of no group.
    pub fn unassigned_persons(&self) -> Vec<PersonId> {
        self.person_ids()
            .filter(|p| self.group_of(*p).is_none())
            .collect()
    }

    /// Total number of group members across all groups.
    pub fn assigned_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Returns true if no group has any member.
    pub fn all_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    /// Sum of all group minimum sizes.
    pub fn total_min_size(&self) -> usize {
        self.groups.iter().map(|g| g.min_size).sum()
    }

    /// Sum of all group capacities.
    pub fn total_capacity(&self) -> usize {
        self.groups.iter().map(|g| g.capacity).sum()
    }

    /// Person ids ordered by name.
    pub fn persons_sorted_by_name(&self) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = self.person_ids().collect();
        ids.sort_by(|a, b| self.persons[a.0].name.cmp(&self.persons[b.0].name));
        ids
    }

    /// Moves `person` into `group`, leaving any previous group.
    pub fn assign(&mut self, person: PersonId, group: GroupId) -> Result<(), InstanceError> {
        if person.0 >= self.persons.len() {
            return Err(InstanceError::PersonIndexOutOfRange(person.0));
        }
        let Some(target) = self.groups.get(group.0) else {
            return Err(InstanceError::GroupIndexOutOfRange(group.0));
        };
        if target.contains(person) {
            return Ok(());
        }
        if !target.has_room() {
            return Err(InstanceError::GroupFull(target.name.clone()));
        }
        self.unassign(person);
        self.groups[group.0].members.push(person);
        Ok(())
    }

    /// Same as [`Instance::assign`], addressing person and group by name.
    pub fn assign_by_name(&mut self, person: &str, group: &str) -> Result<(), InstanceError> {
        let p = self
            .find_person(person)
            .ok_or_else(|| InstanceError::UnknownPerson(person.to_string()))?;
        let g = self
            .find_group(group)
            .ok_or_else(|| InstanceError::UnknownGroup(group.to_string()))?;
        self.assign(p, g)
    }

    /// Removes `person` from its group and returns that group.
    pub fn unassign(&mut self, person: PersonId) -> Option<GroupId> {
        let host = self.group_of(person)?;
        self.groups[host.0].remove_member(person);
        Some(host)
    }

    /// Empties every group.
    pub fn clear_assignments(&mut self) {
        for g in &mut self.groups {
            g.members.clear();
        }
    }

    /// Deletes a group, strips it from every preference list and renumbers the
    /// groups behind it.
    pub(crate) fn remove_group(&mut self, id: GroupId) -> Group {
        let removed = self.groups.remove(id.0);
        for person in &mut self.persons {
            person.preferences.retain(|g| *g != id);
            for g in &mut person.preferences {
                if g.0 > id.0 {
                    g.0 -= 1;
                }
            }
        }
        removed
    }
}
