//! Monte-Carlo sweep over coin radii and point counts.
//!
//! For every `(coin radius, point count)` configuration the experiment draws
//! `num_trials` random point sets, runs the offset search on each, and
//! reports the mean loop count and the fraction of trials that found a
//! covering packing.
//!
//! # Example
//!
//! ```
//! use hex_coverage::experiment::{Experiment, ExperimentConfig};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let config = ExperimentConfig {
//!     num_trials: 5,
//!     coin_radii: vec![0.5],
//!     point_counts: vec![0, 3],
//!     ..ExperimentConfig::default()
//! };
//!
//! let experiment = Experiment::new(config).unwrap();
//! let summaries = experiment.run_with(&mut StdRng::seed_from_u64(1)).unwrap();
//!
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(summaries[0].num_points, 0);
//! assert_eq!(*summaries[0].success_rate.as_ref(), 1.0);
//! ```

mod config;
mod error;
mod summary;

pub use config::ExperimentConfig;
pub use error::ExperimentError;
pub use summary::ConfigurationSummary;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};
use twine_core::Model;

use crate::{
    models::coverage::{CoverInput, HexagonalCover},
    support::{
        constraint::{Constrained, StrictlyPositive},
        geometry::Radius,
        sampling::{PointCount, PointSampler},
        stats::RunningMean,
    },
};

/// A validated sweep, ready to run.
#[derive(Debug, Clone)]
pub struct Experiment {
    num_trials: usize,
    coin_radii: Vec<Radius>,
    point_counts: Vec<PointCount>,
    sampler: PointSampler,
    model: HexagonalCover,
    seed: Option<u64>,
}

impl Experiment {
    /// Validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::NoTrials`] if `num_trials` is zero,
    /// [`ExperimentError::EmptySweep`] if there are no radii or no point counts,
    /// and [`ExperimentError::InvalidArgument`] for a non-positive radius or a
    /// negative point count.
    pub fn new(config: ExperimentConfig) -> Result<Self, ExperimentError> {
        let num_trials = Constrained::<usize, StrictlyPositive>::new(config.num_trials)
            .map_err(|_| ExperimentError::NoTrials)?
            .into_inner();

        if config.coin_radii.is_empty() || config.point_counts.is_empty() {
            return Err(ExperimentError::EmptySweep);
        }

        let coin_radii = config
            .coin_radii
            .iter()
            .map(|&r| Radius::new(r))
            .collect::<Result<_, _>>()?;
        let point_counts = config
            .point_counts
            .iter()
            .map(|&n| PointCount::new(n))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            num_trials,
            coin_radii,
            point_counts,
            sampler: config.sampler,
            model: HexagonalCover::new(config.search),
            seed: config.seed,
        })
    }

    #[must_use]
    pub fn num_trials(&self) -> usize {
        self.num_trials
    }

    /// Every `(coin radius, point count)` pair, radius-major.
    pub fn configurations(&self) -> impl Iterator<Item = (Radius, PointCount)> + '_ {
        self.coin_radii.iter().flat_map(move |&radius| {
            self.point_counts
                .iter()
                .map(move |&count| (radius, count))
        })
    }

    /// A generator seeded from the configuration, or from OS entropy when no
    /// seed was given.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Runs the sweep with the generator from [`Experiment::rng`].
    ///
    /// # Errors
    ///
    /// See [`Experiment::run_configuration`].
    pub fn run(&self) -> Result<Vec<ConfigurationSummary>, ExperimentError> {
        self.run_with(&mut self.rng())
    }

    /// Runs the sweep, drawing every point set from `rng`.
    ///
    /// # Errors
    ///
    /// See [`Experiment::run_configuration`].
    pub fn run_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<ConfigurationSummary>, ExperimentError> {
        self.configurations()
            .map(|(radius, count)| self.run_configuration(rng, radius, count))
            .collect()
    }

    /// Runs all trials for one configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::SuccessRate`] if the aggregated success
    /// rate falls outside `[0, 1]`, which indicates a bug.
    pub fn run_configuration<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        radius: Radius,
        count: PointCount,
    ) -> Result<ConfigurationSummary, ExperimentError> {
        let mut loops = RunningMean::default();
        let mut successes = RunningMean::default();

        for trial in 0..self.num_trials {
            let input = CoverInput {
                points: self.sampler.sample_set(rng, count),
                radius,
            };
            let Ok(result) = self.model.call(&input);

            debug!(
                trial,
                points = input.points.len(),
                valid = result.valid,
                loops = result.loops,
                "trial finished"
            );

            #[allow(clippy::cast_precision_loss)]
            loops.push(result.loops as f64);
            successes.push(f64::from(result.valid));
        }

        let summary = ConfigurationSummary::from_means(radius, count, &loops, &successes)?;
        info!(
            coin_radius = summary.coin_radius,
            num_points = summary.num_points,
            mean_loops = summary.mean_loops,
            success_rate = *summary.success_rate.as_ref(),
            "configuration finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::geometry::GeometryError;

    fn config(num_trials: usize, coin_radii: &[f64], point_counts: &[i64]) -> ExperimentConfig {
        ExperimentConfig {
            num_trials,
            coin_radii: coin_radii.to_vec(),
            point_counts: point_counts.to_vec(),
            seed: Some(17),
            ..ExperimentConfig::default()
        }
    }

    #[test]
    fn rejects_invalid_configurations() {
        assert!(matches!(
            Experiment::new(config(0, &[0.3], &[10])),
            Err(ExperimentError::NoTrials)
        ));
        assert!(matches!(
            Experiment::new(config(10, &[], &[10])),
            Err(ExperimentError::EmptySweep)
        ));
        assert!(matches!(
            Experiment::new(config(10, &[0.3], &[])),
            Err(ExperimentError::EmptySweep)
        ));
        assert!(matches!(
            Experiment::new(config(10, &[0.3, 0.0], &[10])),
            Err(ExperimentError::InvalidArgument(
                GeometryError::InvalidArgument { name: "radius", .. }
            ))
        ));
        assert!(matches!(
            Experiment::new(config(10, &[0.3], &[10, -1])),
            Err(ExperimentError::InvalidArgument(
                GeometryError::InvalidArgument {
                    name: "num_points",
                    ..
                }
            ))
        ));
    }

    #[test]
    fn configurations_are_radius_major() {
        let experiment = Experiment::new(config(1, &[0.1, 0.2], &[5, 10, 15])).unwrap();

        let pairs: Vec<(f64, usize)> = experiment
            .configurations()
            .map(|(r, n)| (r.get(), n.get()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                (0.1, 5),
                (0.1, 10),
                (0.1, 15),
                (0.2, 5),
                (0.2, 10),
                (0.2, 15)
            ]
        );
    }

    #[test]
    fn empty_point_sets_always_succeed() {
        let experiment = Experiment::new(config(20, &[0.1, 0.4], &[0])).unwrap();

        for summary in experiment.run().unwrap() {
            assert_eq!(summary.trials, 20);
            assert_relative_eq!(*summary.success_rate.as_ref(), 1.0);
            assert_relative_eq!(summary.mean_loops, 1.0);
        }
    }

    #[test]
    fn radius_below_step_never_succeeds() {
        let experiment = Experiment::new(config(10, &[0.005], &[3])).unwrap();

        let summaries = experiment.run().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_relative_eq!(*summaries[0].success_rate.as_ref(), 0.0);
        assert_relative_eq!(summaries[0].mean_loops, 0.0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let experiment = Experiment::new(config(15, &[0.2, 0.5], &[5, 20])).unwrap();

        let first = experiment.run().unwrap();
        let second = experiment.run().unwrap();

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        for summary in &first {
            let rate = *summary.success_rate.as_ref();
            assert!((0.0..=1.0).contains(&rate));
            assert!(summary.mean_loops >= 1.0);
        }
    }
}
