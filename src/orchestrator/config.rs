//! Configuration of a trial run.

use std::time::Duration;

use crate::algorithms::greedy::DEFAULT_CORRECTION_ROUNDS;

/// Budget and parallelism of a trial run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    /// Number of independent trial slots.
    pub trials: usize,
    /// Past this point every worker stops, successful or not.
    pub hard_timeout: Duration,
    /// Past this point workers stop once any trial has succeeded.
    pub soft_timeout: Duration,
    /// Worker threads sharing the slots.
    pub workers: usize,
    /// Base seed for reproducible slots. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Correction rounds granted to each trial.
    pub correction_rounds: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 50,
            hard_timeout: Duration::from_secs(60),
            soft_timeout: Duration::from_secs(10),
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            seed: None,
            correction_rounds: DEFAULT_CORRECTION_ROUNDS,
        }
    }
}

impl TrialConfig {
    /// Sets the number of trial slots.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the budget after which every worker stops.
    pub fn with_hard_timeout(mut self, timeout: Duration) -> Self {
        self.hard_timeout = timeout;
        self
    }

    /// Sets the budget after which workers stop once a trial succeeded.
    pub fn with_soft_timeout(mut self, timeout: Duration) -> Self {
        self.soft_timeout = timeout;
        self
    }

    /// Sets the number of worker threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Makes the run reproducible from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the correction rounds granted to each trial.
    pub fn with_correction_rounds(mut self, rounds: usize) -> Self {
        self.correction_rounds = rounds;
        self
    }

    /// Slot count, at least one.
    pub(crate) fn slot_count(&self) -> usize {
        self.trials.max(1)
    }

    /// Worker count between one and the number of slots.
    pub(crate) fn worker_count(&self) -> usize {
        self.workers.clamp(1, self.slot_count())
    }
}
