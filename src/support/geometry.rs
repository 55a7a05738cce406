//! Planar geometry for coin coverage.
//!
//! - [`Point`]: a value-typed location with total equality, ordering, and hashing
//! - [`Coin`]: a closed disc with a [`Radius`]
//! - [`Interval`] and [`Bounds`]: the axis-aligned region points and lattices live in
//! - [`PointSet`]: an ordered set of points, so identical draws collapse to one
//!
//! # Example
//!
//! ```
//! use hex_coverage::support::geometry::{Coin, GeometryError, Point};
//!
//! fn main() -> Result<(), GeometryError> {
//!     let coin = Coin::new(Point::new(0.5, 0.5), 0.25)?;
//!
//!     assert!(coin.covers(&Point::new(0.75, 0.5)));
//!     assert!(!coin.covers(&Point::new(0.9, 0.9)));
//!
//!     assert!(Coin::new(Point::new(0.0, 0.0), 0.0).is_err());
//!     Ok(())
//! }
//! ```

mod bounds;
mod coin;
mod error;
mod point;

pub use bounds::{Bounds, Interval};
pub use coin::{Coin, Radius};
pub use error::GeometryError;
pub use point::{Point, PointSet};
