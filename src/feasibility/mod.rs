//! Feasibility analysis of an instance before any search runs.
//!
//! The check runs in four stages:
//!
//! 1. **Pre-assignment**: only clean instances are validated.
//! 2. **Candidate sufficiency**: groups with fewer interested persons than their
//!    minimum size can never be filled. They are deleted and stripped from every
//!    preference list, repeating until nothing changes.
//! 3. **Combination overfill**: persons sharing a preference set must fit into
//!    the groups of that set (see [`combination`]). This is a necessary condition
//!    only. Overfill arising between combinations with different sets is not
//!    detected.
//! 4. **Aggregate bounds**: the person count must lie between the summed
//!    minimum sizes and the summed capacities.
//!
//! A person stranded by stage 2 is reported as a total mismatch instead when
//! the unpruned instance already violates the aggregate bounds.
//!
//! The stages run on a working copy, so the caller's instance only changes
//! when the whole check passes.

mod combination;

use crate::error::MatchError;
use crate::model::{GroupId, Instance};

use combination::build_combinations;

/// Result of a passing feasibility check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    deleted_groups: Vec<String>,
}

impl CheckReport {
    /// Names of the groups removed for lack of candidates, in deletion order.
    pub fn deleted_groups(&self) -> &[String] {
        &self.deleted_groups
    }

    /// The non-fatal [`MatchError::GroupsDeleted`] diagnostic, if groups were pruned.
    pub fn warning(&self) -> Option<MatchError> {
        if self.deleted_groups.is_empty() {
            None
        } else {
            Some(MatchError::GroupsDeleted(self.deleted_groups.clone()))
        }
    }
}

/// Validates `instance` and prunes groups that cannot reach their minimum size.
///
/// On error the instance is left untouched.
#[tracing::instrument(
    level = "debug",
    skip(instance),
    fields(persons = instance.persons().len(), groups = instance.groups().len())
)]
pub fn check(instance: &mut Instance) -> Result<CheckReport, MatchError> {
    if !instance.all_empty() {
        return Err(MatchError::AlreadyAssigned);
    }

    let mut working = instance.clone();
    let deleted_groups = match prune_unreachable_groups(&mut working) {
        Ok(deleted) => deleted,
        // a stranded person is only a symptom when the totals never fit
        Err(err) => return Err(check_totals(instance).err().unwrap_or(err)),
    };
    check_combinations(&working)?;
    check_totals(&working)?;

    *instance = working;
    Ok(CheckReport { deleted_groups })
}

/// Number of persons listing `group` anywhere in their preferences.
fn candidate_count(instance: &Instance, group: GroupId) -> usize {
    instance
        .persons()
        .iter()
        .filter(|p| p.prefers(group))
        .count()
}

fn prune_unreachable_groups(instance: &mut Instance) -> Result<Vec<String>, MatchError> {
    let mut deleted = Vec::new();
    ensure_preferences_left(instance, &deleted)?;

    loop {
        let mut changed = false;
        for gi in (0..instance.groups().len()).rev() {
            let group = GroupId(gi);
            let candidates = candidate_count(instance, group);
            if candidates >= instance.group(group).min_size() {
                continue;
            }

            let removed = instance.remove_group(group);
            tracing::debug!(
                group = %removed.name(),
                candidates,
                min_size = removed.min_size(),
                "deleting group without enough candidates"
            );
            deleted.push(removed.name().to_string());
            changed = true;
            ensure_preferences_left(instance, &deleted)?;
        }
        if !changed {
            return Ok(deleted);
        }
    }
}

fn ensure_preferences_left(instance: &Instance, deleted: &[String]) -> Result<(), MatchError> {
    match instance.persons().iter().find(|p| p.preferences().is_empty()) {
        Some(person) => Err(MatchError::PersonHasNoPreference {
            person: person.name().to_string(),
            deleted: deleted.to_vec(),
        }),
        None => Ok(()),
    }
}

fn check_combinations(instance: &Instance) -> Result<(), MatchError> {
    let overfilled: Vec<Vec<String>> = build_combinations(instance)
        .iter()
        .filter(|c| c.is_overfilled(instance))
        .map(|c| {
            tracing::debug!(
                quantity = c.quantity,
                available = c.available_capacity(instance),
                "combination overfilled"
            );
            c.group_names(instance)
        })
        .collect();

    if overfilled.is_empty() {
        Ok(())
    } else {
        Err(MatchError::CombinationOverfilled(overfilled))
    }
}

fn check_totals(instance: &Instance) -> Result<(), MatchError> {
    let persons = instance.persons().len();
    let min_total = instance.total_min_size();
    let max_total = instance.total_capacity();
    if persons < min_total || persons > max_total {
        return Err(MatchError::TotalMismatch {
            persons,
            min_total,
            max_total,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(groups: &[(&str, usize, usize)], persons: &[&[&str]]) -> Instance {
        let mut inst = Instance::new();
        for (name, min, cap) in groups {
            inst.add_group(*name, *min, *cap).unwrap();
        }
        for (i, prefs) in persons.iter().enumerate() {
            inst.add_person_with_names(format!("p{i}"), prefs).unwrap();
        }
        inst
    }

    #[test]
    fn test_clean_instance_passes() {
        let mut inst = build(
            &[("A", 1, 2), ("B", 1, 2)],
            &[&["A", "B"], &["A", "B"], &["A", "B"]],
        );
        let report = check(&mut inst).unwrap();
        assert!(report.deleted_groups().is_empty());
        assert_eq!(report.warning(), None);
        assert_eq!(inst.groups().len(), 2);
    }

    #[test]
    fn test_assigned_instance_rejected() {
        let mut inst = build(&[("A", 0, 2)], &[&["A"]]);
        inst.assign_by_name("p0", "A").unwrap();
        assert_eq!(check(&mut inst), Err(MatchError::AlreadyAssigned));
    }

    #[test]
    fn test_too_few_persons_is_total_mismatch() {
        let mut inst = build(&[("A", 3, 3)], &[&["A"], &["A"]]);
        let before = inst.clone();
        assert_eq!(
            check(&mut inst),
            Err(MatchError::TotalMismatch {
                persons: 2,
                min_total: 3,
                max_total: 3
            })
        );
        assert_eq!(inst, before);
    }

    #[test]
    fn test_unreachable_group_is_deleted() {
        let mut inst = build(
            &[("A", 0, 3), ("B", 2, 3)],
            &[&["A", "B"], &["A"], &["A"]],
        );
        let report = check(&mut inst).unwrap();
        assert_eq!(report.deleted_groups(), &["B".to_string()]);
        assert_eq!(report.warning(), Some(MatchError::GroupsDeleted(vec!["B".to_string()])));
        assert_eq!(inst.groups().len(), 1);
        assert!(inst.persons().iter().all(|p| p.preferences().len() == 1));
    }

    #[test]
    fn test_sole_preference_deleted() {
        let mut inst = build(
            &[("A", 0, 3), ("B", 2, 3)],
            &[&["B"], &["A"], &["A"]],
        );
        let before = inst.clone();
        assert_eq!(
            check(&mut inst),
            Err(MatchError::PersonHasNoPreference {
                person: "p0".to_string(),
                deleted: vec!["B".to_string()],
            })
        );
        assert_eq!(inst, before);
    }

    #[test]
    fn test_person_without_preferences_rejected() {
        let mut inst = build(&[("A", 0, 3)], &[&[], &["A"]]);
        assert_eq!(
            check(&mut inst),
            Err(MatchError::PersonHasNoPreference {
                person: "p0".to_string(),
                deleted: vec![],
            })
        );
    }

    #[test]
    fn test_identical_sole_preference_overfills() {
        let mut inst = build(&[("A", 0, 1), ("B", 0, 5)], &[&["A"], &["A"], &["B"]]);
        let err = check(&mut inst).unwrap_err();
        assert_eq!(
            err,
            MatchError::CombinationOverfilled(vec![vec!["A".to_string()]])
        );
        assert_eq!(err.diagnostic(), "A");
    }

    #[test]
    fn test_overfilled_pair_is_pipe_joined() {
        let mut inst = build(
            &[("A", 0, 1), ("B", 0, 1), ("C", 0, 5)],
            &[&["A", "B"], &["B", "A"], &["A", "B"], &["C"]],
        );
        let err = check(&mut inst).unwrap_err();
        assert_eq!(err.diagnostic(), "A|B");
    }

    #[test]
    fn test_minimums_out_of_reach_is_total_mismatch() {
        let mut inst = build(
            &[("A", 2, 3), ("B", 2, 3)],
            &[&["A", "B"], &["A", "B"], &["B", "A"]],
        );
        assert_eq!(
            check(&mut inst),
            Err(MatchError::TotalMismatch {
                persons: 3,
                min_total: 4,
                max_total: 6
            })
        );
    }

    #[test]
    fn test_check_is_idempotent() {
        let mut inst = build(
            &[("A", 1, 3), ("B", 4, 5), ("C", 0, 2)],
            &[&["A", "B"], &["B", "C"], &["A", "C"], &["C", "A"]],
        );
        let first = check(&mut inst).unwrap();
        assert_eq!(first.deleted_groups(), &["B".to_string()]);

        let pruned = inst.clone();
        let second = check(&mut inst).unwrap();
        assert!(second.deleted_groups().is_empty());
        assert_eq!(inst, pruned);
    }

    #[test]
    fn test_checked_instance_has_enough_candidates_and_fits() {
        let mut inst = build(
            &[("A", 2, 3), ("B", 3, 3), ("C", 1, 2)],
            &[&["A", "C"], &["A", "B"], &["C", "A"], &["A"]],
        );
        check(&mut inst).unwrap();
        for g in inst.group_ids() {
            assert!(candidate_count(&inst, g) >= inst.group(g).min_size());
        }
        let n = inst.persons().len();
        assert!(n >= inst.total_min_size() && n <= inst.total_capacity());
    }
}
