//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - generation parameters (`WalkParams`, `ErrorParams`, `GenConfig`)
//! - the synthesized artifacts (`Pair`, `Column`, `Dataset`, `GeneratedSet`)
//! - the portable manifest schema (`DatasetManifest`, `PairSpec`)

pub mod types;

pub use types::*;
