use crate::support::geometry::{Bounds, Coin, Point, Radius};

use super::hexagonal_lattice;

/// Coin radius used when nothing else is specified, e.g. for demonstrations.
///
/// The offset search itself has no default radius.
pub const DEFAULT_COIN_RADIUS: f64 = 0.3;

/// Returns `true` if every point lies under at least one coin.
///
/// Stops at the first uncovered point. An empty point set is always covered.
pub fn all_covered<'a>(coins: &[Coin], points: impl IntoIterator<Item = &'a Point>) -> bool {
    points.into_iter().all(|point| point.covered_by(coins))
}

/// Coins laid out for one candidate lattice offset.
///
/// The default packing holds no coins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Packing {
    coins: Vec<Coin>,
}

impl Packing {
    #[must_use]
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Iterates over the coin centers in layout order.
    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.coins.iter().map(Coin::center)
    }

    /// Returns `true` if every point lies under at least one coin of this packing.
    pub fn covers_all<'a>(&self, points: impl IntoIterator<Item = &'a Point>) -> bool {
        all_covered(&self.coins, points)
    }
}

impl FromIterator<Coin> for Packing {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        Self {
            coins: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Packing {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.coins.iter()
    }
}

/// Lays out coins of `coin_radius` on a hexagonal lattice translated by `(x_offset, y_offset)`.
///
/// With `overflow_bounds`, the bounds are first widened by `coin_radius` on
/// every side so coins centered just outside them can cover points near the
/// edges. The offset is applied to the bounds before the lattice is
/// generated, which moves the whole lattice.
#[must_use]
pub fn hexagonal_packing(
    bounds: Bounds,
    overflow_bounds: bool,
    coin_radius: Radius,
    x_offset: f64,
    y_offset: f64,
) -> Packing {
    let bounds = if overflow_bounds {
        bounds.expanded(coin_radius.get())
    } else {
        bounds
    };
    let bounds = bounds.translated(x_offset, y_offset);

    hexagonal_lattice(bounds, 2.0 * coin_radius.get())
        .into_iter()
        .map(|center| Coin::with_radius(center, coin_radius))
        .collect()
}
