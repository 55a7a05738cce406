//! Command-line runner for the coverage experiment.
//!
//! Prints one report line per `(coin radius, point count)` configuration to
//! stdout as soon as its trials finish. Progress is logged to stderr.

use std::process;

use clap::{Parser, ValueEnum};
use hex_coverage::{
    experiment::{Experiment, ExperimentConfig, ExperimentError},
    logging,
    models::coverage::StepSize,
    support::{constraint::StrictlyPositive, geometry::GeometryError},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// 1000 trials, radii 0.1 to 1.0, point counts 10 to 100
    Standard,
    /// 100 trials, radii 0.1 to 0.9, point counts 0 to 14
    Dense,
}

#[derive(Parser)]
#[command(name = "hex-coverage")]
#[command(about = "Estimate how often a shifted hexagonal coin lattice covers random points", long_about = None)]
struct Args {
    /// Sweep to start from; the options below override parts of it
    #[arg(long, value_enum, default_value = "standard")]
    preset: Preset,

    /// Trials per configuration
    #[arg(long)]
    trials: Option<usize>,

    /// Coin radius to sweep (repeatable)
    #[arg(long = "radius", allow_negative_numbers = true)]
    radii: Vec<f64>,

    /// Number of random points per trial (repeatable)
    #[arg(long = "points", allow_negative_numbers = true)]
    points: Vec<i64>,

    /// Spacing of candidate lattice offsets
    #[arg(long, allow_negative_numbers = true)]
    step_size: Option<f64>,

    /// Stop each search after this many offsets; 0 means no cap
    #[arg(long)]
    max_loops: Option<usize>,

    /// Lay out coins only inside the unit square
    #[arg(long)]
    no_overflow: bool,

    /// Decimal digits random coordinates are rounded to
    #[arg(long)]
    digits: Option<u32>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> Result<ExperimentConfig, ExperimentError> {
        let mut config = match self.preset {
            Preset::Standard => ExperimentConfig::default(),
            Preset::Dense => ExperimentConfig::dense(),
        };

        if let Some(trials) = self.trials {
            config.num_trials = trials;
        }
        if !self.radii.is_empty() {
            config.coin_radii.clone_from(&self.radii);
        }
        if !self.points.is_empty() {
            config.point_counts.clone_from(&self.points);
        }
        if let Some(step_size) = self.step_size {
            config.search.step_size = StepSize::new(step_size)?;
        }
        if self.max_loops == Some(0) {
            config.search.max_loops = None;
        } else if let Some(max_loops) = self.max_loops {
            let cap = StrictlyPositive::new(max_loops).map_err(|source| {
                GeometryError::InvalidArgument {
                    name: "max_loops",
                    source,
                }
            })?;
            config.search = config.search.with_max_loops(cap);
        }
        if self.no_overflow {
            config.search.overflow_bounds = false;
        }
        if let Some(digits) = self.digits {
            config.sampler.digits = digits;
        }
        config.seed = self.seed.or(config.seed);

        Ok(config)
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let experiment = match args.config().and_then(Experiment::new) {
        Ok(experiment) => experiment,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!(
        "num_trials={} (per each unique combination of coin_radius and num_points)",
        experiment.num_trials()
    );

    let mut rng = experiment.rng();
    for (radius, count) in experiment.configurations() {
        match experiment.run_configuration(&mut rng, radius, count) {
            Ok(summary) => println!("{summary}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
