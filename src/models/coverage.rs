//! Hexagonal coin coverage.
//!
//! Given a set of points and a coin radius, [`HexagonalCover`] searches the
//! translations of a hexagonal coin lattice for one that covers every point.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use hex_coverage::models::coverage::{CoverInput, HexagonalCover, SearchConfig};
//! use hex_coverage::support::geometry::{Point, PointSet, Radius};
//! use twine_core::Model;
//!
//! let model = HexagonalCover::new(SearchConfig::default());
//! let input = CoverInput {
//!     points: PointSet::from([Point::new(0.5, 0.5)]),
//!     radius: Radius::new(0.3).unwrap(),
//! };
//!
//! let Ok(result) = model.call(&input);
//! assert!(result.valid);
//! assert_eq!(result.loops, 1);
//! ```

pub(crate) mod core;

pub use self::core::{
    DEFAULT_COIN_RADIUS, DEFAULT_STEP_SIZE, Packing, SQUISH_FACTOR, SearchConfig, StepSize,
    TrialResult, all_covered, find_hexagonal_packing, hexagonal_lattice, hexagonal_packing,
    offsets,
};

use std::convert::Infallible;

use twine_core::Model;

use crate::support::geometry::{PointSet, Radius};

/// A point set to cover and the radius of the coins covering it.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverInput {
    pub points: PointSet,
    pub radius: Radius,
}

/// Offset search for a covering hexagonal packing, as a [`Model`].
///
/// Every call is independent and deterministic: the same input and
/// configuration always produce the same [`TrialResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HexagonalCover {
    config: SearchConfig,
}

impl HexagonalCover {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Model for HexagonalCover {
    type Input = CoverInput;
    type Output = TrialResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(find_hexagonal_packing(
            &input.points,
            input.radius,
            &self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::geometry::Point;

    #[test]
    fn adapter_matches_core_search() {
        let points: PointSet = [(0.1, 0.9), (0.8, 0.2), (0.45, 0.55)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();
        let radius = Radius::new(0.4).unwrap();
        let config = SearchConfig::default();

        let Ok(from_model) = HexagonalCover::new(config).call(&CoverInput {
            points: points.clone(),
            radius,
        });
        let from_core = find_hexagonal_packing(&points, radius, &config);

        assert_eq!(from_model, from_core);
    }
}
