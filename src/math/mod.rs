//! Mathematical utilities: summary statistics and least-squares regression.

pub mod ols;
pub mod stats;

pub use ols::*;
pub use stats::*;
