//! Offset search for hexagonal coin packings.
//!
//! Coins of radius `r` are centered on a hexagonal lattice with spacing `2r`
//! along each row and `2r · √3/2` between rows, odd rows shifted by `r`.
//! Translating that lattice by any offset in `[0, r) × [0, r)` yields every
//! packing the search needs to consider; [`find_hexagonal_packing`] walks
//! those offsets on a fixed step grid and stops at the first packing that
//! covers all target points.

mod config;
mod lattice;
mod packing;
mod results;
mod search;

#[cfg(test)]
mod test_support;

pub use config::{DEFAULT_STEP_SIZE, SearchConfig, StepSize};
pub use lattice::{SQUISH_FACTOR, hexagonal_lattice};
pub use packing::{DEFAULT_COIN_RADIUS, Packing, all_covered, hexagonal_packing};
pub use results::TrialResult;
pub use search::{find_hexagonal_packing, offsets};
