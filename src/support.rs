//! Supporting utilities used by models and the experiment driver.

pub mod constraint;
pub mod geometry;
pub mod sampling;
pub mod stats;
