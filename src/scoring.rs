//! Quality metrics for an assignment.

use crate::model::Instance;

/// Preference satisfaction of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quote {
    /// `1 +` the average 0-based rank achieved. 1.0 means everyone got their first choice.
    pub quote: f64,
    /// `100 * (1 - rank_sum / preference_sum)`; higher is better.
    pub percentage: f64,
}

/// Scores the current assignment of `instance`.
///
/// Only assigned persons contribute. With nobody assigned both values are 0.
pub fn calc_quote(instance: &Instance) -> Quote {
    let mut rank_sum = 0usize;
    let mut preference_sum = 0usize;
    let mut assigned = 0usize;

    for (gi, group) in instance.groups().iter().enumerate() {
        for &member in group.members() {
            let person = instance.person(member);
            // a member outside its own preference list counts as its worst rank
            rank_sum += person
                .preferences()
                .iter()
                .position(|g| g.index() == gi)
                .unwrap_or(person.preferences().len());
            preference_sum += person.preferences().len();
            assigned += 1;
        }
    }

    if assigned == 0 || preference_sum == 0 {
        return Quote::default();
    }

    Quote {
        quote: 1.0 + rank_sum as f64 / assigned as f64,
        percentage: 100.0 * (1.0 - rank_sum as f64 / preference_sum as f64),
    }
}
