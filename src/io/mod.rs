//! Input/output helpers.
//!
//! - dataset CSV export (`export`)
//! - dataset manifest JSON (`manifest`)

pub mod export;
pub mod manifest;

pub use export::*;
pub use manifest::*;
