//! End-to-end matching: feasibility check followed by the trial run.

use crate::error::MatchError;
use crate::feasibility::{check, CheckReport};
use crate::model::Instance;
use crate::orchestrator::{RunReport, TrialConfig, TrialRunner};

/// Result of a successful [`Matcher::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    check: CheckReport,
    run: RunReport,
}

impl MatchReport {
    /// Outcome of the feasibility check.
    pub fn check(&self) -> &CheckReport {
        &self.check
    }

    /// Outcome of the trial run.
    pub fn run(&self) -> &RunReport {
        &self.run
    }

    /// Non-fatal diagnostics to surface to the user: deleted groups and the soft timeout.
    pub fn warnings(&self) -> Vec<MatchError> {
        self.check
            .warning()
            .into_iter()
            .chain(self.run.warning())
            .collect()
    }
}

/// Checks an instance and assigns its persons with a [`TrialRunner`].
#[derive(Debug, Clone)]
pub struct Matcher {
    runner: TrialRunner,
}

impl Matcher {
    /// Creates a matcher running trials with `config`.
    pub fn new(config: TrialConfig) -> Self {
        Self {
            runner: TrialRunner::new(config),
        }
    }

    /// Validates, prunes and matches `instance`.
    ///
    /// Fatal check errors return before any trial runs. Groups deleted by the
    /// check stay deleted even if the trial run then fails.
    #[tracing::instrument(level = "info", skip(self, instance))]
    pub fn run(&self, instance: &mut Instance) -> Result<MatchReport, MatchError> {
        let check = check(instance)?;
        if let Some(warning) = check.warning() {
            tracing::warn!(%warning, "continuing with pruned instance");
        }
        let run = self.runner.run(instance)?;
        Ok(MatchReport { check, run })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(TrialConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> TrialConfig {
        TrialConfig::default()
            .with_trials(8)
            .with_hard_timeout(Duration::from_secs(10))
            .with_soft_timeout(Duration::from_secs(5))
    }

    #[test]
    fn test_pruned_groups_are_reported_as_warning() {
        let mut inst = Instance::new();
        inst.add_group("A", 0, 3).unwrap();
        inst.add_group("B", 2, 3).unwrap();
        inst.add_person_with_names("p0", &["A", "B"]).unwrap();
        inst.add_person_with_names("p1", &["A"]).unwrap();

        let report = Matcher::new(config()).run(&mut inst).unwrap();
        assert_eq!(
            report.warnings(),
            vec![MatchError::GroupsDeleted(vec!["B".to_string()])]
        );
        assert_eq!(inst.groups().len(), 1);
        assert_eq!(inst.assigned_count(), 2);
        assert_eq!(report.run().quote().quote, 1.0);
    }

    #[test]
    fn test_fatal_check_stops_before_trials() {
        let mut inst = Instance::new();
        inst.add_group("A", 0, 1).unwrap();
        inst.add_person_with_names("p0", &["A"]).unwrap();
        inst.add_person_with_names("p1", &["A"]).unwrap();
        let before = inst.clone();

        let err = Matcher::new(config()).run(&mut inst).unwrap_err();
        assert_eq!(err, MatchError::CombinationOverfilled(vec![vec!["A".to_string()]]));
        assert!(err.is_fatal());
        assert_eq!(inst, before);
    }

    #[test]
    fn test_clean_run_has_no_warnings() {
        let mut inst = Instance::new();
        inst.add_group("A", 1, 2).unwrap();
        inst.add_group("B", 1, 2).unwrap();
        for i in 0..3 {
            inst.add_person_with_names(format!("p{i}"), &["A", "B"]).unwrap();
        }
        let report = Matcher::new(config()).run(&mut inst).unwrap();
        assert!(report.warnings().is_empty());
        assert!(report.check().deleted_groups().is_empty());
        assert!(inst.unassigned_persons().is_empty());
    }
}
