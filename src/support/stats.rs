//! Streaming summary statistics.

/// Arithmetic mean accumulated one sample at a time.
///
/// ```
/// use hex_coverage::support::stats::RunningMean;
///
/// let mut mean = RunningMean::default();
/// assert_eq!(mean.mean(), None);
///
/// mean.extend([1.0, 2.0, 6.0]);
/// assert_eq!(mean.count(), 3);
/// assert_eq!(mean.mean(), Some(3.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    /// Adds a sample.
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Number of samples seen.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the samples seen, or `None` before the first sample.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl Extend<f64> for RunningMean {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for RunningMean {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut mean = Self::default();
        mean.extend(iter);
        mean
    }
}
