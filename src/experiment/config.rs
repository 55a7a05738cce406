use crate::{models::coverage::SearchConfig, support::sampling::PointSampler};

/// Parameters of a coverage sweep.
///
/// The default is the standard sweep: 1000 trials for each coin radius
/// `0.1, 0.2, …, 1.0` and each point count in `10, 20, 30, 40, 50, 100`.
/// [`ExperimentConfig::dense`] trades trials for a finer grid of small
/// point counts.
///
/// Values are validated by [`Experiment::new`](super::Experiment::new).
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Trials run for every configuration.
    pub num_trials: usize,

    /// Coin radii swept in the outer loop.
    pub coin_radii: Vec<f64>,

    /// Points drawn per trial, swept in the inner loop.
    pub point_counts: Vec<i64>,

    pub sampler: PointSampler,
    pub search: SearchConfig,

    /// Seed for reproducible runs; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_trials: 1000,
            coin_radii: tenths(1..=10),
            point_counts: vec![10, 20, 30, 40, 50, 100],
            sampler: PointSampler::default(),
            search: SearchConfig::default(),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// 100 trials for each coin radius `0.1, …, 0.9` and each point count `0, …, 14`.
    #[must_use]
    pub fn dense() -> Self {
        Self {
            num_trials: 100,
            coin_radii: tenths(1..=9),
            point_counts: (0..15).collect(),
            ..Self::default()
        }
    }
}

fn tenths(range: std::ops::RangeInclusive<u32>) -> Vec<f64> {
    range.map(|i| f64::from(i) / 10.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn standard_sweep() {
        let config = ExperimentConfig::default();

        assert_eq!(config.num_trials, 1000);
        assert_eq!(config.coin_radii.len(), 10);
        assert_relative_eq!(config.coin_radii[0], 0.1);
        assert_relative_eq!(config.coin_radii[9], 1.0);
        assert_eq!(config.point_counts, [10, 20, 30, 40, 50, 100]);
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn dense_sweep() {
        let config = ExperimentConfig::dense();

        assert_eq!(config.num_trials, 100);
        assert_eq!(config.coin_radii.len(), 9);
        assert_relative_eq!(config.coin_radii[8], 0.9);
        assert_eq!(config.point_counts.first(), Some(&0));
        assert_eq!(config.point_counts.last(), Some(&14));
        assert_eq!(config.point_counts.len(), 15);
    }
}
