use std::ops::Deref;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{GeometryError, Point};

/// Radius of a coin.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Radius(f64);

impl Radius {
    /// Creates a [`Radius`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if the value is zero,
    /// negative, or `NaN`.
    pub fn new(value: f64) -> Result<Self, GeometryError> {
        let radius = StrictlyPositive::new(value).map_err(GeometryError::invalid("radius"))?;
        Ok(Self::from_constrained(radius))
    }

    /// Creates a [`Radius`] from a pre-validated value.
    #[must_use]
    pub fn from_constrained(value: Constrained<f64, StrictlyPositive>) -> Self {
        Self(value.into_inner())
    }

    /// Returns the radius as a plain `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Deref for Radius {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A closed disc used to cover points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    center: Point,
    radius: Radius,
}

impl Coin {
    /// Creates a coin centered at `center`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `radius` is not strictly positive.
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        Ok(Self::with_radius(center, Radius::new(radius)?))
    }

    /// Creates a coin from an already validated radius.
    #[must_use]
    pub fn with_radius(center: Point, radius: Radius) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> Radius {
        self.radius
    }

    /// Returns `true` if `point` lies inside the coin or on its edge.
    #[must_use]
    pub fn covers(&self, point: &Point) -> bool {
        self.center.distance(point) <= *self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn rejects_non_positive_radius() {
        let origin = Point::new(0.0, 0.0);

        assert!(matches!(
            Coin::new(origin, 0.0),
            Err(GeometryError::InvalidArgument {
                name: "radius",
                source: ConstraintError::Zero
            })
        ));
        assert!(matches!(
            Coin::new(origin, -0.3),
            Err(GeometryError::InvalidArgument {
                source: ConstraintError::Negative,
                ..
            })
        ));
        assert!(Coin::new(origin, f64::NAN).is_err());
    }

    #[test]
    fn edge_counts_as_covered() {
        let coin = Coin::new(Point::new(0.0, 0.0), 0.5).unwrap();

        assert!(coin.covers(&Point::new(0.5, 0.0)));
        assert!(coin.covers(&Point::new(0.0, -0.5)));
        assert!(coin.covers(&Point::new(0.25, 0.25)));
        assert!(!coin.covers(&Point::new(0.5, 0.01)));
    }

    #[test]
    fn edge_counts_as_covered_off_origin() {
        let coin = Coin::new(Point::new(0.5, 0.5), 0.25).unwrap();

        assert!(coin.covers(&Point::new(0.75, 0.5)));
        assert!(coin.covers(&Point::new(0.5, 0.25)));
        assert!(!coin.covers(&Point::new(0.9, 0.9)));
    }

    #[test]
    fn covered_by_any_coin() {
        let coins = [
            Coin::new(Point::new(0.0, 0.0), 0.1).unwrap(),
            Coin::new(Point::new(1.0, 1.0), 0.1).unwrap(),
        ];

        assert!(Point::new(0.95, 1.0).covered_by(&coins));
        assert!(Point::new(0.05, 0.0).covered_by(&coins));
        assert!(!Point::new(0.5, 0.5).covered_by(&coins));
        assert!(!Point::new(0.5, 0.5).covered_by(&[]));
    }
}
