use std::{
    cmp::Ordering,
    collections::BTreeSet,
    hash::{Hash, Hasher},
};

use super::Coin;

/// An ordered set of points.
///
/// Points compare by value, so inserting two draws with identical
/// coordinates leaves a single entry.
/// Iteration order is ascending by `x`, then `y`.
pub type PointSet = BTreeSet<Point>;

/// A location in the plane.
///
/// Equality, ordering, and hashing all use the exact coordinate values under
/// a total order, so `Point` can key both ordered and hashed collections.
/// Negative zero is stored as positive zero so the two never compare unequal.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from exact coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        // Adding positive zero maps -0.0 to 0.0 and leaves every other value unchanged.
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    /// Creates a point with both coordinates rounded to `digits` decimal places.
    ///
    /// Halfway cases round away from zero.
    ///
    /// ```
    /// use hex_coverage::support::geometry::Point;
    ///
    /// let p = Point::rounded(0.123_456, 0.987_654, 2);
    /// assert_eq!(p, Point::new(0.12, 0.99));
    /// ```
    #[must_use]
    pub fn rounded(x: f64, y: f64, digits: u32) -> Self {
        let scale = 10_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
        let round = |v: f64| {
            let scaled = (v * scale).round() / scale;
            if scaled.is_finite() { scaled } else { v }
        };
        Self::new(round(x), round(y))
    }

    /// Returns the `x` coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the `y` coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns both coordinates as an `(x, y)` pair.
    #[must_use]
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance between `self` and `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns `true` if any of the coins covers this point.
    ///
    /// Stops at the first covering coin.
    pub fn covered_by<'a>(&self, coins: impl IntoIterator<Item = &'a Coin>) -> bool {
        coins.into_iter().any(|coin| coin.covers(self))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use approx::assert_relative_eq;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(b.distance(&a), 5.0);
        assert_relative_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn identical_draws_collapse() {
        let draws = [
            Point::rounded(0.501, 0.25, 2),
            Point::rounded(0.499, 0.25, 2),
            Point::new(0.5, 0.25),
            Point::new(0.25, 0.5),
        ];

        let ordered: PointSet = draws.iter().copied().collect();
        let hashed: HashSet<Point> = draws.iter().copied().collect();

        assert_eq!(ordered.len(), 2);
        assert_eq!(hashed.len(), 2);
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(Point::new(-0.0, 0.0), Point::new(0.0, -0.0));

        let set: HashSet<Point> = [Point::new(-0.0, 1.0), Point::new(0.0, 1.0)].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordered_by_x_then_y() {
        let set: PointSet = [
            Point::new(0.5, 0.1),
            Point::new(0.1, 0.9),
            Point::new(0.1, 0.2),
        ]
        .into();

        let coords: Vec<_> = set.iter().map(Point::coords).collect();
        assert_eq!(coords, vec![(0.1, 0.2), (0.1, 0.9), (0.5, 0.1)]);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(Point::rounded(0.125, -0.125, 2), Point::new(0.13, -0.13));
        assert_eq!(Point::rounded(0.7, 0.2, 0), Point::new(1.0, 0.0));
    }
}
