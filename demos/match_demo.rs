//! Generates a random instance, checks it and matches it.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=debug cargo run --example match_demo
//! ```

use std::time::Duration;

use group_matcher::generate::{random_instance, GeneratorConfig};
use group_matcher::{Matcher, TrialConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = SmallRng::seed_from_u64(7);
    let mut instance = random_instance(&GeneratorConfig::default(), &mut rng);
    println!(
        "{} persons, {} groups (total bounds {}..={})",
        instance.persons().len(),
        instance.groups().len(),
        instance.total_min_size(),
        instance.total_capacity()
    );

    let config = TrialConfig::default()
        .with_hard_timeout(Duration::from_secs(30))
        .with_soft_timeout(Duration::from_secs(5));

    let report = match Matcher::new(config).run(&mut instance) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("matching failed: {err}");
            std::process::exit(1);
        }
    };
    for warning in report.warnings() {
        println!("warning: {warning}");
    }

    let quote = report.run().quote();
    println!(
        "quote {:.3}, {:.1}% ({} of {} trials solved, {} attempts, {:?})",
        quote.quote,
        quote.percentage,
        report.run().successes(),
        config.trials,
        report.run().attempts(),
        report.run().elapsed()
    );

    for id in instance.group_ids() {
        let group = instance.group(id);
        let names: Vec<&str> = group
            .members()
            .iter()
            .map(|&p| instance.person(p).name())
            .collect();
        println!("{}: {}", group.label(), names.join(", "));
    }
}
