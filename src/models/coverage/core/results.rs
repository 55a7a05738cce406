//! Results of a single offset search.

use super::Packing;

/// Outcome of one offset search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialResult {
    /// The covering packing when `valid`, otherwise the last packing tried.
    ///
    /// Empty if no candidate offset was tried at all.
    pub packing: Packing,

    /// Whether some candidate offset covered every point.
    pub valid: bool,

    /// Number of candidate offsets visited, including the covering one.
    pub loops: usize,
}
