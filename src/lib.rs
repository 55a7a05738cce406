//! # Hex Coverage
//!
//! Monte-Carlo experiments on covering random points with coins.
//!
//! A set of points is scattered over a region (the unit square by default).
//! Coins of a fixed radius are laid out on a hexagonal lattice, and the
//! lattice is translated across one period of its symmetry until every
//! point sits under some coin. Repeating this over many random point sets
//! estimates how likely such a translation is to exist, and how many
//! candidate translations the grid search needs before it finds one.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, exposed as [`twine_core::Model`] implementations.
//! - [`experiment`]: The sweep over radii, point counts, and trials.
//! - [`support`]: Supporting utilities (constraints, geometry, sampling, statistics).
//! - [`logging`]: Subscriber setup for the command-line driver.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod experiment;
pub mod logging;
pub mod models;
pub mod support;
