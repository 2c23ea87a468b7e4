//! Greedy trial solver with eviction and minimum-size correction.
//!
//! A trial has two phases:
//!
//! 1. **Initial placement**: every unassigned person, in the order given,
//!    takes the first preference that accepts them (see [`placement`]). A full
//!    group accepts a newcomer if one of its members can move on to a later
//!    preference with room. A person nobody makes room for ends the trial, since
//!    there is no backtracking across persons.
//! 2. **Correction**: groups still below their minimum size pull in persons
//!    from other groups that listed them (see [`correction`]), for a bounded
//!    number of rounds.

mod correction;
mod placement;

use crate::model::{Group, GroupId, Instance, PersonId};

use super::{TrialOutcome, TrialSolver};

/// Default number of correction rounds before a trial is given up.
pub const DEFAULT_CORRECTION_ROUNDS: usize = 50;

/// Greedy placement followed by a bounded correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedySolver {
    correction_rounds: usize,
}

impl GreedySolver {
    /// Creates a solver that runs at most `correction_rounds` correction rounds.
    pub fn new(correction_rounds: usize) -> Self {
        Self { correction_rounds }
    }

    /// Maximum number of correction rounds per trial.
    pub fn correction_rounds(&self) -> usize {
        self.correction_rounds
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new(DEFAULT_CORRECTION_ROUNDS)
    }
}

impl TrialSolver for GreedySolver {
    /// Persons missing from `order` are handled after it, in id order.
    /// Repeated ids and ids outside the instance are ignored.
    fn solve(&self, instance: &mut Instance, order: &[PersonId]) -> TrialOutcome {
        let mut trial = Trial::new(instance);
        let persons = trial.instance.persons().len();

        let mut pending: Vec<PersonId> = order
            .iter()
            .copied()
            .filter(|p| p.index() < persons)
            .collect();
        pending.extend(trial.instance.person_ids().filter(|p| !order.contains(p)));

        for person in pending {
            // already placed, either beforehand or earlier in this order
            if trial.host(person).is_some() {
                continue;
            }
            let preferences = trial.instance.person(person).preferences().to_vec();
            let placed = preferences
                .into_iter()
                .any(|group| placement::place(&mut trial, person, group));
            if !placed {
                tracing::trace!(%person, "no preferred group can take person");
                return TrialOutcome::Unplaced(person);
            }
        }

        let stable = correction::correct(&mut trial, self.correction_rounds);
        if stable && trial.instance.groups().iter().all(Group::within_bounds) {
            TrialOutcome::Solved
        } else {
            TrialOutcome::Uncorrected
        }
    }
}

/// Instance under construction plus a cache of each person's host group.
pub(crate) struct Trial<'a> {
    instance: &'a mut Instance,
    host: Vec<Option<GroupId>>,
}

impl<'a> Trial<'a> {
    fn new(instance: &'a mut Instance) -> Self {
        let mut host = vec![None; instance.persons().len()];
        for (gi, group) in instance.groups().iter().enumerate() {
            for member in group.members() {
                host[member.index()] = Some(GroupId(gi));
            }
        }
        Self { instance, host }
    }

    fn group(&self, id: GroupId) -> &Group {
        self.instance.group(id)
    }

    fn host(&self, person: PersonId) -> Option<GroupId> {
        self.host[person.index()]
    }

    /// Appends `person` to `group` without checking capacity.
    fn push(&mut self, group: GroupId, person: PersonId) {
        self.instance.groups[group.0].members.push(person);
        self.host[person.index()] = Some(group);
    }

    /// Puts `person` into `slot` of `group`, returning the member it displaced.
    fn replace(&mut self, group: GroupId, slot: usize, person: PersonId) -> PersonId {
        let displaced =
            std::mem::replace(&mut self.instance.groups[group.0].members[slot], person);
        self.host[displaced.index()] = None;
        self.host[person.index()] = Some(group);
        displaced
    }

    /// Moves `person` out of its current group into `group`.
    fn relocate(&mut self, person: PersonId, group: GroupId) {
        if let Some(from) = self.host(person) {
            self.instance.groups[from.0].remove_member(person);
        }
        self.push(group, person);
    }

    /// Length of the longest preference list in the instance.
    fn max_preferences(&self) -> usize {
        self.instance
            .persons()
            .iter()
            .map(|p| p.preferences().len())
            .max()
            .unwrap_or(0)
    }
}
