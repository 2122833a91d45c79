//! `pairsynth` library crate.
//!
//! The binary (`pairsynth`) is a thin wrapper around this library so that:
//!
//! - the generation core is testable without spawning processes
//! - modules are reusable (e.g., embedding the generator in a backtest harness)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod calendar;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod synth;
