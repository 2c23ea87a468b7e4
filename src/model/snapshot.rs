//! Plain, index-based record form of an [`Instance`].
//!
//! Groups refer to members by person index and persons refer to preferences by
//! group index, so a snapshot holds no shared references and can be handed to
//! importers and exporters as is. With the `serde` feature enabled it
//! serializes to the JSON layout `{"groups": [...], "persons": [...]}`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{GroupId, Instance, InstanceError, PersonId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupRecord {
    pub name: String,
    pub min_size: usize,
    pub capacity: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonRecord {
    pub name: String,
    pub preferences: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InstanceSnapshot {
    pub groups: Vec<GroupRecord>,
    pub persons: Vec<PersonRecord>,
}

impl Instance {
    /// Captures groups, persons and the current assignment.
    pub fn snapshot(&self) -> InstanceSnapshot {
        InstanceSnapshot {
            groups: self
                .groups
                .iter()
                .map(|g| GroupRecord {
                    name: g.name.clone(),
                    min_size: g.min_size,
                    capacity: g.capacity,
                    members: g.members.iter().map(|p| p.0).collect(),
                })
                .collect(),
            persons: self
                .persons
                .iter()
                .map(|p| PersonRecord {
                    name: p.name.clone(),
                    preferences: p.preferences.iter().map(|g| g.0).collect(),
                })
                .collect(),
        }
    }

    /// Rebuilds an instance, validating indices and all instance invariants.
    pub fn from_snapshot(snapshot: &InstanceSnapshot) -> Result<Self, InstanceError> {
        let mut instance = Instance::new();
        for g in &snapshot.groups {
            instance.add_group(g.name.clone(), g.min_size, g.capacity)?;
        }
        for p in &snapshot.persons {
            let preferences = p.preferences.iter().copied().map(GroupId).collect();
            instance.add_person(p.name.clone(), preferences)?;
        }
        for (gi, g) in snapshot.groups.iter().enumerate() {
            for &pi in &g.members {
                if pi >= instance.persons.len() {
                    return Err(InstanceError::PersonIndexOutOfRange(pi));
                }
                let person = PersonId(pi);
                if let Some(host) = instance.group_of(person) {
                    return Err(InstanceError::AlreadyInGroup {
                        person: instance.persons[pi].name.clone(),
                        group: instance.groups[host.0].name.clone(),
                    });
                }
                instance.assign(person, GroupId(gi))?;
            }
        }
        Ok(instance)
    }
}
