//! Uniform random point sets.
//!
//! Points are drawn uniformly from a [`Bounds`] rectangle and rounded to a
//! fixed number of decimal digits, so independent draws can land on the
//! same value and collapse inside a [`PointSet`].
//!
//! Any [`rand::Rng`] works as the source. Tests and reproducible runs seed
//! a [`rand::rngs::StdRng`].
//!
//! ```
//! use hex_coverage::support::sampling::{PointCount, PointSampler};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let sampler = PointSampler::default();
//!
//! let points = sampler.sample_set(&mut rng, PointCount::new(10).unwrap());
//! assert!(points.len() <= 10);
//! assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.x())));
//! ```

use rand::{
    Rng,
    distributions::{Distribution, Uniform},
};

use crate::support::{
    constraint::{ConstraintError, NonNegative},
    geometry::{Bounds, GeometryError, Interval, Point, PointSet},
};

/// Number of decimal digits random coordinates are rounded to by default.
pub const DEFAULT_DIGITS: u32 = 2;

/// A requested number of random draws.
///
/// The count must not be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PointCount(usize);

impl PointCount {
    /// Creates a [`PointCount`] from a signed request.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `count` is negative.
    pub fn new(count: i64) -> Result<Self, GeometryError> {
        let count = NonNegative::new(count).map_err(GeometryError::invalid("num_points"))?;
        let count = usize::try_from(count.into_inner()).map_err(|_| {
            GeometryError::InvalidArgument {
                name: "num_points",
                source: ConstraintError::AboveMaximum,
            }
        })?;
        Ok(Self(count))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for PointCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

/// Draws points uniformly from a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSampler {
    /// Region the points are drawn from.
    pub bounds: Bounds,

    /// Decimal digits each coordinate is rounded to.
    pub digits: u32,
}

impl Default for PointSampler {
    fn default() -> Self {
        Self {
            bounds: Bounds::UNIT_SQUARE,
            digits: DEFAULT_DIGITS,
        }
    }
}

impl PointSampler {
    /// Draws a single rounded point.
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = sample_axis(rng, self.bounds.x);
        let y = sample_axis(rng, self.bounds.y);
        Point::rounded(x, y, self.digits)
    }

    /// Draws `count` points into a set.
    ///
    /// Duplicate draws collapse, so the set may hold fewer than `count` points.
    pub fn sample_set<R: Rng + ?Sized>(&self, rng: &mut R, count: PointCount) -> PointSet {
        (0..count.get()).map(|_| self.sample_point(rng)).collect()
    }
}

/// Uniform in `[min, max)`, or `min` for a zero-width interval.
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, interval: Interval) -> f64 {
    if interval.width() > 0.0 {
        Uniform::new(interval.min(), interval.max()).sample(rng)
    } else {
        interval.min()
    }
}
