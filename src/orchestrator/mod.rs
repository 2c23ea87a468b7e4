//! Runs many randomized trials in parallel and keeps the best one.
//!
//! Every slot repeatedly clones the caller's instance, shuffles the person order
//! and runs the solver until a trial succeeds or the budget says stop. Workers
//! share nothing but an atomic "found" flag, the slot counter and the start
//! time. All workers are joined before the winner is chosen, so the caller's
//! instance is written exactly once.

mod config;


pub use config::TrialConfig;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::algorithms::{GreedySolver, TrialSolver};
use crate::error::MatchError;
use crate::model::Instance;
use crate::scoring::{calc_quote, Quote};

/// Summary of a trial run that produced an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    quote: Quote,
    successes: usize,
    attempts: usize,
    elapsed: Duration,
    soft_timeout: bool,
}

impl RunReport {
    /// Score of the assignment written back to the instance.
    pub fn quote(&self) -> Quote {
        self.quote
    }

    /// Number of slots that produced a solved trial.
    pub fn successes(&self) -> usize {
        self.successes
    }

    /// Number of solver invocations across all slots.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Wall time of the whole run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// [`MatchError::SoftTimeout`] if the run outlasted the soft budget.
    pub fn warning(&self) -> Option<MatchError> {
        self.soft_timeout.then_some(MatchError::SoftTimeout)
    }
}

/// State shared by all workers of one run.
struct Shared {
    start: Instant,
    found: AtomicBool,
    next_slot: AtomicUsize,
    attempts: AtomicUsize,
}

impl Shared {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            found: AtomicBool::new(false),
            next_slot: AtomicUsize::new(0),
            attempts: AtomicUsize::new(0),
        }
    }

    fn should_stop(&self, config: &TrialConfig) -> bool {
        let elapsed = self.start.elapsed();
        elapsed > config.hard_timeout
            || (elapsed > config.soft_timeout && self.found.load(Ordering::Acquire))
    }
}

/// Parallel trial runner over a [`TrialSolver`].
#[derive(Debug, Clone)]
pub struct TrialRunner<S = GreedySolver> {
    config: TrialConfig,
    solver: S,
}

impl TrialRunner<GreedySolver> {
    /// Creates a runner using the greedy solver.
    pub fn new(config: TrialConfig) -> Self {
        Self::with_solver(config, GreedySolver::new(config.correction_rounds))
    }
}

impl Default for TrialRunner<GreedySolver> {
    fn default() -> Self {
        Self::new(TrialConfig::default())
    }
}

impl<S: TrialSolver> TrialRunner<S> {
    /// Creates a runner using a custom solver.
    pub fn with_solver(config: TrialConfig, solver: S) -> Self {
        Self { config, solver }
    }

    /// Configuration of this runner.
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Runs the trials and writes the best solved assignment into `instance`.
    ///
    /// Fails with [`MatchError::HardTimeout`] if no trial succeeded in time; the
    /// instance is then left as it was.
    #[tracing::instrument(
        level = "info",
        skip(self, instance),
        fields(trials = self.config.trials, workers = self.config.worker_count())
    )]
    pub fn run(&self, instance: &mut Instance) -> Result<RunReport, MatchError> {
        let shared = Shared::new();
        let seeds = self.slot_seeds();
        let base: &Instance = instance;

        let mut solved: Vec<(usize, Instance)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..self.config.worker_count())
                .map(|_| scope.spawn(|| self.work(base, &seeds, &shared)))
                .collect();

            let mut solved = Vec::new();
            for handle in handles {
                match handle.join() {
                    Ok(mut trials) => solved.append(&mut trials),
                    Err(_) => tracing::error!("trial worker panicked"),
                }
            }
            solved
        });

        let elapsed = shared.start.elapsed();
        let attempts = shared.attempts.load(Ordering::Relaxed);
        solved.sort_by_key(|(slot, _)| *slot);
        let successes = solved.len();

        let Some((slot, best, quote)) = select_best(solved) else {
            tracing::warn!(?elapsed, attempts, "no trial succeeded before the hard timeout");
            return Err(MatchError::HardTimeout);
        };
        *instance = best;

        let soft_timeout = elapsed > self.config.soft_timeout;
        if soft_timeout {
            tracing::warn!(?elapsed, "stopped at the soft timeout");
        }
        tracing::info!(
            slot,
            successes,
            attempts,
            quote = quote.quote,
            percentage = quote.percentage,
            "selected best trial"
        );

        Ok(RunReport {
            quote,
            successes,
            attempts,
            elapsed,
            soft_timeout,
        })
    }

    /// Draws one RNG seed per slot from a single seeder.
    ///
    /// Seeds are fixed before any worker starts, so a slot's trials do not
    /// depend on which worker claims it.
    pub(crate) fn slot_seeds(&self) -> Vec<u64> {
        let mut seeder = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        (0..self.config.slot_count())
            .map(|_| seeder.next_u64())
            .collect()
    }

    /// Claims slots until none are left or the budget is spent.
    fn work(&self, base: &Instance, seeds: &[u64], shared: &Shared) -> Vec<(usize, Instance)> {
        let mut solved = Vec::new();
        while !shared.should_stop(&self.config) {
            let slot = shared.next_slot.fetch_add(1, Ordering::Relaxed);
            let Some(&seed) = seeds.get(slot) else {
                break;
            };
            if let Some(instance) = self.run_slot(slot, seed, base, shared) {
                solved.push((slot, instance));
            }
        }
        solved
    }

    /// Retries fresh shuffles of `base` until one is solved or the budget is spent.
    fn run_slot(
        &self,
        slot: usize,
        seed: u64,
        base: &Instance,
        shared: &Shared,
    ) -> Option<Instance> {
        let mut rng = SmallRng::seed_from_u64(seed);

        loop {
            let mut candidate = base.clone();
            shared.attempts.fetch_add(1, Ordering::Relaxed);
            let outcome = self.solver.solve_shuffled(&mut candidate, &mut rng);
            if outcome.is_solved() {
                shared.found.store(true, Ordering::Release);
                tracing::debug!(slot, "trial solved");
                return Some(candidate);
            }
            if shared.should_stop(&self.config) {
                tracing::debug!(slot, ?outcome, "slot stopped without a solution");
                return None;
            }
        }
    }
}

/// Runs `trials` greedy trials with the given budget.
///
/// Shorthand for [`TrialRunner::run`] with a default configuration otherwise.
pub fn run_trials(
    instance: &mut Instance,
    trials: usize,
    hard_timeout: Duration,
    soft_timeout: Duration,
) -> Result<RunReport, MatchError> {
    let config = TrialConfig::default()
        .with_trials(trials)
        .with_hard_timeout(hard_timeout)
        .with_soft_timeout(soft_timeout);
    TrialRunner::new(config).run(instance)
}

/// Picks the trial with the strictly highest percentage; ties keep the earliest.
pub(crate) fn select_best(trials: Vec<(usize, Instance)>) -> Option<(usize, Instance, Quote)> {
    let mut best: Option<(usize, Instance, Quote)> = None;
    for (slot, instance) in trials {
        let quote = calc_quote(&instance);
        if best
            .as_ref()
            .map_or(true, |(_, _, b)| quote.percentage > b.percentage)
        {
            best = Some((slot, instance, quote));
        }
    }
    best
}
