use crate::support::constraint::{ConstraintError, NonNegative};

use super::GeometryError;

/// A closed interval `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Creates an interval.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if either end is not finite
    /// or if `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, GeometryError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeometryError::InvalidArgument {
                name: "bounds",
                source: ConstraintError::NotANumber,
            });
        }
        NonNegative::new(max - min).map_err(GeometryError::invalid("bounds"))?;
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Widens the interval by `margin` on both ends.
    #[must_use]
    pub fn expanded(self, margin: f64) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Shifts both ends by `delta`.
    #[must_use]
    pub fn translated(self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// An axis-aligned rectangle given by one [`Interval`] per axis.
///
/// Defaults to the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: Interval,
    pub y: Interval,
}

impl Bounds {
    /// The unit square `[0, 1] × [0, 1]`.
    pub const UNIT_SQUARE: Self = Self {
        x: Interval::UNIT,
        y: Interval::UNIT,
    };

    #[must_use]
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Widens the rectangle by `margin` on every side.
    #[must_use]
    pub fn expanded(self, margin: f64) -> Self {
        Self {
            x: self.x.expanded(margin),
            y: self.y.expanded(margin),
        }
    }

    /// Shifts the rectangle by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x.translated(dx),
            y: self.y.translated(dy),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT_SQUARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_reversed_or_non_finite_intervals() {
        assert!(Interval::new(0.0, 0.0).is_ok());
        assert!(Interval::new(-1.0, 2.0).is_ok());

        assert!(matches!(
            Interval::new(1.0, 0.0),
            Err(GeometryError::InvalidArgument { name: "bounds", .. })
        ));
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn expand_then_translate() {
        let bounds = Bounds::default().expanded(0.3).translated(0.1, 0.05);

        assert_relative_eq!(bounds.x.min(), -0.2, epsilon = 1e-12);
        assert_relative_eq!(bounds.x.max(), 1.4, epsilon = 1e-12);
        assert_relative_eq!(bounds.y.min(), -0.25, epsilon = 1e-12);
        assert_relative_eq!(bounds.y.max(), 1.35, epsilon = 1e-12);
        assert_relative_eq!(bounds.x.width(), 1.6, epsilon = 1e-12);
    }
}
