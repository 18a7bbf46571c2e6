//! A privacy-budget sweep in the style of an interactive notebook.
//!
//! Builds a small dataset, checks the sensitivity of a sum query against
//! random neighbours, then sweeps the Laplace mechanism across an epsilon
//! range and prints one row per epsilon.
//!
//! # Usage
//!
//! ```text
//! cargo run --example privacy_sweep
//! cargo run --example privacy_sweep -- 3.0 0.25
//! RUST_LOG=dplab=debug cargo run --example privacy_sweep -- 2.0 0.5 42
//! ```
//!
//! Positional arguments are `max_epsilon`, `epsilon_step`, and an optional
//! seed. Without a seed the run is seeded from the operating system.

use std::error::Error;

use dplab_experiments::{
    epsilon::EpsilonRange,
    neighbour::{self, Change},
    query::Sum,
    sensitivity,
    sweep::{self, Config},
};
use dplab_notebook::print_hline;
use dplab_observers::TracingObserver;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let max_epsilon = parse_arg(&args, 0)?.unwrap_or(2.0);
    let epsilon_step = parse_arg(&args, 1)?.unwrap_or(0.25);
    let seed: Option<u64> = args.get(2).map(|s| s.parse()).transpose()?;

    let mut rng = seed.map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64);

    // Ages of a toy survey population.
    let dataset = [23, 35, 41, 29, 52, 38, 61, 47, 33, 26];

    print_hline(60)?;
    let neighbour = neighbour::generate_unobserved(&dataset, &mut rng)?;
    match neighbour.change() {
        Change::Removed(value) => println!("Neighbour: removed {value}"),
        Change::Added(value) => println!("Neighbour: added {value}"),
    }
    println!("{:?}", neighbour.values());

    print_hline(60)?;
    let estimate = sensitivity::estimate(&dataset, &Sum, 1000, &mut rng)?;
    println!(
        "Sum query: max change {:.1}, mean change {:.1} over {} neighbours",
        estimate.max_change, estimate.mean_change, estimate.trials
    );

    // The largest record bounds how far one addition or removal moves the sum.
    let sensitivity = dataset.iter().copied().max().map_or(1.0, f64::from);

    print_hline(60)?;
    let epsilons = EpsilonRange::new(max_epsilon, epsilon_step)?;
    let config = Config::new(2000, sensitivity)?;
    let result = sweep::run(
        &dataset,
        &Sum,
        &epsilons,
        &config,
        &mut rng,
        TracingObserver::default(),
    )?;

    println!(
        "{:>8}  {:>10}  {:>14}  {:>12}",
        "epsilon", "scale", "mean abs error", "release gap"
    );
    for point in &result.points {
        println!(
            "{:>8.3}  {:>10.3}  {:>14.3}  {:>12.3}",
            point.epsilon, point.scale, point.mean_abs_error, point.mean_release_gap
        );
    }
    print_hline(60)?;

    Ok(())
}

/// Parses the positional argument at `index` as an `f64`, if present.
fn parse_arg(args: &[String], index: usize) -> Result<Option<f64>, Box<dyn Error>> {
    Ok(args.get(index).map(|s| s.parse::<f64>()).transpose()?)
}
