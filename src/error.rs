use thiserror::Error;

/// Outcomes of the feasibility check and the trial run that the caller must see.
///
/// [`MatchError::GroupsDeleted`] and [`MatchError::SoftTimeout`] are warnings: the
/// instance is still usable. Every other variant leaves the instance unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Persons are already assigned to groups")]
    AlreadyAssigned,

    #[error("Groups deleted for lack of candidates: {}", .0.join(", "))]
    GroupsDeleted(Vec<String>),

    #[error("Person {person} has no preference left after deleting groups: {}", .deleted.join(", "))]
    PersonHasNoPreference { person: String, deleted: Vec<String> },

    #[error("Combinations overfilled: {}", join_combinations(.0))]
    CombinationOverfilled(Vec<Vec<String>>),

    #[error("{persons} persons do not fit the total group bounds {min_total}..={max_total}")]
    TotalMismatch {
        persons: usize,
        min_total: usize,
        max_total: usize,
    },

    #[error("No trial succeeded before the hard timeout")]
    HardTimeout,

    #[error("Search stopped at the soft timeout")]
    SoftTimeout,
}

impl MatchError {
    /// Returns false for the warnings that still leave a usable instance.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MatchError::GroupsDeleted(_) | MatchError::SoftTimeout)
    }

    /// Group names involved in the error, formatted for display to the end user.
    ///
    /// Names within an overfilled combination are joined by `|`, everything else by `, `.
    pub fn diagnostic(&self) -> String {
        match self {
            MatchError::GroupsDeleted(groups) => groups.join(", "),
            MatchError::PersonHasNoPreference { deleted, .. } => deleted.join(", "),
            MatchError::CombinationOverfilled(combinations) => join_combinations(combinations),
            _ => String::new(),
        }
    }
}

fn join_combinations(combinations: &[Vec<String>]) -> String {
    combinations
        .iter()
        .map(|c| c.join("|"))
        .collect::<Vec<_>>()
        .join(", ")
}
