//! group-matcher - preference-based assignment of persons to bounded groups
//!
//! Persons rank the groups they would join; groups carry a minimum size and a
//! capacity. The crate checks whether an instance can be satisfied at all,
//! prunes groups that cannot be filled, and then runs randomized greedy trials
//! in parallel, keeping the assignment with the best preference score.
//!
//! ```
//! use group_matcher::{Instance, Matcher, TrialConfig};
//!
//! let mut instance = Instance::new();
//! instance.add_group("A", 1, 2).unwrap();
//! instance.add_group("B", 1, 2).unwrap();
//! for name in ["Ann", "Bob", "Cid"] {
//!     instance.add_person_with_names(name, &["A", "B"]).unwrap();
//! }
//!
//! let report = Matcher::new(TrialConfig::default().with_trials(4))
//!     .run(&mut instance)
//!     .unwrap();
//! assert!(instance.unassigned_persons().is_empty());
//! assert!(report.run().quote().quote >= 1.0);
//! ```

pub mod algorithms;
pub mod error;
pub mod feasibility;
pub mod generate;
pub mod matcher;
pub mod model;
pub mod orchestrator;
pub mod scoring;

pub use error::MatchError;
pub use feasibility::{check, CheckReport};
pub use matcher::{MatchReport, Matcher};
pub use model::{Group, GroupId, Instance, InstanceError, Person, PersonId};
pub use orchestrator::{run_trials, RunReport, TrialConfig, TrialRunner};
pub use scoring::{calc_quote, Quote};
