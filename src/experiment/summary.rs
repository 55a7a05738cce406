use std::fmt;

use crate::support::{
    constraint::{Constrained, UnitInterval},
    geometry::Radius,
    sampling::PointCount,
    stats::RunningMean,
};

use super::ExperimentError;

/// Aggregate statistics for one `(coin radius, point count)` configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigurationSummary {
    pub coin_radius: f64,

    /// Number of draws requested per trial; duplicates may make sets smaller.
    pub num_points: usize,

    pub trials: usize,

    /// Mean number of offsets visited per trial.
    pub mean_loops: f64,

    /// Fraction of trials that found a covering packing.
    pub success_rate: Constrained<f64, UnitInterval>,
}

impl ConfigurationSummary {
    /// Builds a summary from per-trial loop counts and `0`/`1` successes.
    ///
    /// With no trials recorded both means are taken as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::SuccessRate`] if the success mean is not in `[0, 1]`.
    pub fn from_means(
        coin_radius: Radius,
        num_points: PointCount,
        loops: &RunningMean,
        successes: &RunningMean,
    ) -> Result<Self, ExperimentError> {
        let success_rate = UnitInterval::new(successes.mean().unwrap_or_default())
            .map_err(ExperimentError::SuccessRate)?;

        Ok(Self {
            coin_radius: coin_radius.get(),
            num_points: num_points.get(),
            trials: loops.count(),
            mean_loops: loops.mean().unwrap_or_default(),
            success_rate,
        })
    }
}

impl fmt::Display for ConfigurationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coin_radius={} num_points={} trials={} mean_loops={:.3} success_rate={:.3}",
            self.coin_radius,
            self.num_points,
            self.trials,
            self.mean_loops,
            self.success_rate.as_ref(),
        )
    }
}
