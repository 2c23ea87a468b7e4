pub mod greedy;

pub use greedy::GreedySolver;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Instance, PersonId};

/// How a single trial ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// Every person is placed and every group lies within its size bounds.
    Solved,
    /// Every person is placed, but some group is still below its minimum size
    /// when the correction pass gave up.
    Uncorrected,
    /// The given person fit into none of their preferred groups.
    Unplaced(PersonId),
}

impl TrialOutcome {
    /// Returns true for [`TrialOutcome::Solved`].
    pub fn is_solved(&self) -> bool {
        matches!(self, TrialOutcome::Solved)
    }
}

/// Algorithm assigning the unassigned persons of an instance in one attempt.
///
/// Implementations mutate the instance they are given, which is expected to be
/// a private copy: a failed attempt leaves a partial assignment behind.
pub trait TrialSolver: Send + Sync {
    /// Runs one trial, handling persons in the order given by `order`.
    fn solve(&self, instance: &mut Instance, order: &[PersonId]) -> TrialOutcome;

    /// Runs one trial over a uniformly shuffled person order.
    fn solve_shuffled<R>(&self, instance: &mut Instance, rng: &mut R) -> TrialOutcome
    where
        R: Rng + ?Sized,
        Self: Sized,
    {
        let mut order: Vec<PersonId> = instance.person_ids().collect();
        order.shuffle(rng);
        self.solve(instance, &order)
    }
}
