use std::ops::Deref;

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    geometry::{Bounds, GeometryError},
};

/// Default increment between candidate offsets.
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// Increment between candidate lattice offsets on each axis.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StepSize(f64);

impl StepSize {
    /// Creates a [`StepSize`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if the value is zero,
    /// negative, or `NaN`.
    pub fn new(value: f64) -> Result<Self, GeometryError> {
        let step = StrictlyPositive::new(value).map_err(GeometryError::invalid("step_size"))?;
        Ok(Self::from_constrained(step))
    }

    /// Creates a [`StepSize`] from a pre-validated value.
    #[must_use]
    pub fn from_constrained(value: Constrained<f64, StrictlyPositive>) -> Self {
        Self(value.into_inner())
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for StepSize {
    fn default() -> Self {
        Self(DEFAULT_STEP_SIZE)
    }
}

impl Deref for StepSize {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Search parameters for [`find_hexagonal_packing`](super::find_hexagonal_packing).
///
/// The default searches the unit square with overflow enabled, a step of
/// [`DEFAULT_STEP_SIZE`], and no loop cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Region the packing has to reach.
    pub bounds: Bounds,

    /// Widen the bounds by one coin radius on every side before laying out coins.
    ///
    /// Coins centered just outside the region can then still cover points
    /// near its edges.
    pub overflow_bounds: bool,

    /// Increment between candidate offsets on each axis.
    pub step_size: StepSize,

    /// Optional cap on the number of candidate offsets visited.
    ///
    /// The candidate whose count reaches the cap is not tried, so at most
    /// `max_loops - 1` packings are tested.
    pub max_loops: Option<Constrained<usize, StrictlyPositive>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::UNIT_SQUARE,
            overflow_bounds: true,
            step_size: StepSize::default(),
            max_loops: None,
        }
    }
}

impl SearchConfig {
    /// Returns this configuration with `max_loops` set.
    #[must_use]
    pub fn with_max_loops(self, max_loops: Constrained<usize, StrictlyPositive>) -> Self {
        Self {
            max_loops: Some(max_loops),
            ..self
        }
    }
}
