use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when constructing geometric values.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// A value violated the precondition of the argument it was passed as.
    #[error("invalid argument `{name}`")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },
}

impl GeometryError {
    /// Returns a closure that wraps a [`ConstraintError`] for the named argument.
    ///
    /// Intended for `map_err` at construction sites.
    pub(crate) fn invalid(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidArgument { name, source }
    }
}
