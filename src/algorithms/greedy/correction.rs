//! Correction pass raising undersized groups to their minimum size.

use crate::model::{GroupId, PersonId};

use super::Trial;

/// Persons in other groups who listed a target group.
#[derive(Debug, Default)]
struct Candidates {
    /// Their host group stays at or above its minimum without them.
    free: Vec<PersonId>,
    /// Moving them leaves their host group short.
    needed: Vec<PersonId>,
}

/// Runs up to `rounds` correction rounds.
///
/// Returns true once a round finishes without pulling anyone out of a group
/// that needed them. Returns false if the bound is reached first.
pub(super) fn correct(trial: &mut Trial<'_>, rounds: usize) -> bool {
    let mut stable = false;
    let mut round = 0;

    while round < rounds && !stable {
        round += 1;
        stable = true;

        for gi in 0..trial.instance.groups().len() {
            let group = GroupId(gi);
            let missing = {
                let g = trial.group(group);
                g.min_size().saturating_sub(g.len())
            };

            for _ in 0..missing {
                let candidates = candidates_for(trial, group);
                if candidates.free.is_empty() {
                    insert_best_from(trial, group, &candidates.needed);
                    stable = false;
                } else {
                    insert_best_from(trial, group, &candidates.free);
                }
            }
        }
    }

    if !stable {
        tracing::trace!(rounds, "correction did not settle");
    }
    stable
}

/// Collects everyone outside `target` who listed it, by ascending preference rank.
fn candidates_for(trial: &Trial<'_>, target: GroupId) -> Candidates {
    let mut candidates = Candidates::default();

    for rank in 0..trial.max_preferences() {
        for (gi, group) in trial.instance.groups().iter().enumerate() {
            if GroupId(gi) == target {
                continue;
            }
            let needs_all = group.min_size() >= group.len();
            for &member in group.members() {
                if trial.instance.person(member).preferences().get(rank) != Some(&target) {
                    continue;
                }
                if needs_all {
                    candidates.needed.push(member);
                } else {
                    candidates.free.push(member);
                }
            }
        }
    }

    candidates
}

/// Moves the candidate who ranks `target` best into it, scanning each rank
/// from the back of the pool.
fn insert_best_from(trial: &mut Trial<'_>, target: GroupId, pool: &[PersonId]) {
    for rank in 0..trial.max_preferences() {
        let chosen = pool
            .iter()
            .rev()
            .copied()
            .find(|p| trial.instance.person(*p).preferences().get(rank) == Some(&target));
        if let Some(person) = chosen {
            trial.relocate(person, target);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Instance;

    #[test]
    fn test_candidates_split_by_host_slack() {
        let mut inst = Instance::new();
        let a = inst.add_group("A", 1, 3).unwrap();
        let b = inst.add_group("B", 2, 3).unwrap();
        let t = inst.add_group("T", 1, 3).unwrap();
        let p0 = inst.add_person("p0", vec![a, t]).unwrap();
        let p1 = inst.add_person("p1", vec![a, t]).unwrap();
        let p2 = inst.add_person("p2", vec![t, b]).unwrap();
        let p3 = inst.add_person("p3", vec![b, t]).unwrap();

        let mut trial = Trial::new(&mut inst);
        trial.push(a, p0);
        trial.push(a, p1);
        trial.push(b, p2);
        trial.push(b, p3);

        let c = candidates_for(&trial, t);
        // rank 0 first: p2 lists T first
        assert_eq!(c.needed, vec![p2, p3]);
        assert_eq!(c.free, vec![p0, p1]);
    }

    #[test]
    fn test_best_rank_wins_then_last_in_pool() {
        let mut inst = Instance::new();
        let a = inst.add_group("A", 0, 5).unwrap();
        let t = inst.add_group("T", 1, 3).unwrap();
        let p0 = inst.add_person("p0", vec![a, t]).unwrap();
        let p1 = inst.add_person("p1", vec![t, a]).unwrap();
        let p2 = inst.add_person("p2", vec![t, a]).unwrap();

        let mut trial = Trial::new(&mut inst);
        trial.push(a, p0);
        trial.push(a, p1);
        trial.push(a, p2);

        insert_best_from(&mut trial, t, &[p0, p1, p2]);
        assert_eq!(inst.group(t).members(), &[p2]);
    }

    #[test]
    fn test_free_candidates_keep_round_stable() {
        let mut inst = Instance::new();
        let a = inst.add_group("A", 1, 3).unwrap();
        let t = inst.add_group("T", 1, 3).unwrap();
        let p0 = inst.add_person("p0", vec![a, t]).unwrap();
        let p1 = inst.add_person("p1", vec![a, t]).unwrap();

        let mut trial = Trial::new(&mut inst);
        trial.push(a, p0);
        trial.push(a, p1);
        assert!(correct(&mut trial, 50));
        assert_eq!(inst.group(a).len(), 1);
        assert_eq!(inst.group(t).len(), 1);
    }

    #[test]
    fn test_forced_moves_shift_the_shortage() {
        // A and T both need their only member; neither round can settle
        let mut inst = Instance::new();
        let a = inst.add_group("A", 1, 1).unwrap();
        let t = inst.add_group("T", 1, 1).unwrap();
        let p0 = inst.add_person("p0", vec![a, t]).unwrap();

        let mut trial = Trial::new(&mut inst);
        trial.push(a, p0);
        assert!(!correct(&mut trial, 5));
        assert_eq!(inst.assigned_count(), 1);
    }
}
