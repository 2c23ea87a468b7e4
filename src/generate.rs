//! Random instances for testing and benchmarking.

use rand::seq::index::sample;
use rand::Rng;

use crate::model::{Group, GroupId, Instance, Person};

/// Shape of a generated instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub groups: usize,
    pub persons: usize,
    /// Preferences per person, capped at the number of groups.
    pub preferences: usize,
    pub min_size: usize,
    pub capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            groups: 10,
            persons: 130,
            preferences: 3,
            min_size: 12,
            capacity: 16,
        }
    }
}

/// Builds an unassigned instance of uniform groups where every person lists
/// distinct groups in random order.
///
/// A `capacity` below `min_size` is raised to `min_size`.
pub fn random_instance<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Instance {
    let capacity = config.capacity.max(config.min_size);
    let mut instance = Instance::new();
    for i in 0..config.groups {
        instance
            .groups
            .push(Group::new(format!("Group {i}"), config.min_size, capacity));
    }

    let wishes = config.preferences.min(config.groups);
    for i in 0..config.persons {
        let preferences = sample(rng, config.groups, wishes)
            .into_iter()
            .map(GroupId)
            .collect();
        instance
            .persons
            .push(Person::new(format!("Person {i}"), preferences));
    }
    instance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_shape() {
        let mut rng = SmallRng::seed_from_u64(1);
        let inst = random_instance(&GeneratorConfig::default(), &mut rng);
        assert_eq!(inst.groups().len(), 10);
        assert_eq!(inst.persons().len(), 130);
        assert!(inst.all_empty());
        assert_eq!(inst.group(GroupId(3)).name(), "Group 3");
        assert_eq!(inst.group(GroupId(3)).label(), "Group 3 (0/12-16)");
        assert!(inst.find_person("Person 129").is_some());
    }

    #[test]
    fn test_preferences_are_distinct_and_valid() {
        let mut rng = SmallRng::seed_from_u64(2);
        let config = GeneratorConfig {
            groups: 4,
            persons: 50,
            preferences: 6,
            min_size: 0,
            capacity: 20,
        };
        let inst = random_instance(&config, &mut rng);
        for p in inst.persons() {
            assert_eq!(p.preferences().len(), 4);
            let mut prefs: Vec<_> = p.preferences().to_vec();
            prefs.sort();
            prefs.dedup();
            assert_eq!(prefs.len(), 4);
            assert!(prefs.iter().all(|g| g.index() < 4));
        }
    }

    #[test]
    fn test_same_seed_same_instance() {
        let config = GeneratorConfig::default();
        let a = random_instance(&config, &mut SmallRng::seed_from_u64(9));
        let b = random_instance(&config, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
