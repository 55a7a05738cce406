use thiserror::Error;

use crate::support::{constraint::ConstraintError, geometry::GeometryError};

/// Errors from configuring or running an [`Experiment`](super::Experiment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExperimentError {
    /// A coin radius or point count was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] GeometryError),

    /// The experiment was asked to run zero trials per configuration.
    #[error("an experiment needs at least one trial per configuration")]
    NoTrials,

    /// There are no coin radii or no point counts to sweep over.
    #[error("an experiment needs at least one coin radius and one point count")]
    EmptySweep,

    /// The aggregated success rate was not a fraction.
    #[error("success rate out of range")]
    SuccessRate(#[source] ConstraintError),
}
