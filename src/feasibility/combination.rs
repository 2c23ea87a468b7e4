//! Preference combinations used to bound feasibility before search.
//!
//! Persons are folded into combinations keyed by their preference set. A set
//! that is contained in an existing, larger combination is counted there too,
//! but still opens a combination of its own unless one of equal size already
//! covers it. Feeding persons longest preference list first makes sure the
//! superset combinations exist before their subsets arrive.

use crate::model::{GroupId, Instance};

/// One group of a combination and how many folded persons listed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Part {
    pub(crate) group: GroupId,
    pub(crate) candidate_amount: usize,
}

/// A set of groups jointly preferred by `quantity` persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Combination {
    pub(crate) quantity: usize,
    pub(crate) configuration: Vec<Part>,
}

impl Combination {
    fn new(config: &[GroupId]) -> Self {
        Self {
            quantity: 1,
            configuration: config
                .iter()
                .map(|&group| Part {
                    group,
                    candidate_amount: 1,
                })
                .collect(),
        }
    }

    /// Returns true if every group of `config` is part of this combination.
    fn covers(&self, config: &[GroupId]) -> bool {
        config
            .iter()
            .all(|g| self.configuration.iter().any(|part| part.group == *g))
    }

    fn absorb(&mut self, config: &[GroupId]) {
        self.quantity += 1;
        for part in &mut self.configuration {
            if config.contains(&part.group) {
                part.candidate_amount += 1;
            }
        }
    }

    /// Seats the combination can draw on: per group, the smaller of its
    /// capacity and the number of folded persons listing it.
    pub(crate) fn available_capacity(&self, instance: &Instance) -> usize {
        self.configuration
            .iter()
            .map(|part| instance.group(part.group).capacity().min(part.candidate_amount))
            .sum()
    }

    /// Returns true if more persons share the combination than it can seat.
    pub(crate) fn is_overfilled(&self, instance: &Instance) -> bool {
        self.quantity > self.available_capacity(instance)
    }

    /// Group names in the order of the first person that opened the combination.
    pub(crate) fn group_names(&self, instance: &Instance) -> Vec<String> {
        self.configuration
            .iter()
            .map(|part| instance.group(part.group).name().to_string())
            .collect()
    }
}

/// Builds all combinations of `instance`, visiting persons longest preference
/// list first and in input order otherwise.
pub(crate) fn build_combinations(instance: &Instance) -> Vec<Combination> {
    let mut persons: Vec<_> = instance.persons().iter().collect();
    persons.sort_by(|a, b| b.preferences().len().cmp(&a.preferences().len()));

    let mut combinations: Vec<Combination> = Vec::new();
    for person in persons {
        let config = person.preferences();
        let mut registered = false;
        for combination in &mut combinations {
            if combination.covers(config) {
                combination.absorb(config);
                registered |= combination.configuration.len() == config.len();
            }
        }
        if !registered {
            combinations.push(Combination::new(config));
        }
    }
    combinations
}
