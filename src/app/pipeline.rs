//! Shared generation pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! assemble dataset -> per-pair diagnostics
//!
//! The CLI subcommands then focus on presentation (what to print/export).

use crate::domain::{GenConfig, GeneratedSet};
use crate::error::AppError;
use crate::report::{PairDiagnostics, compute_diagnostics};
use crate::synth::assemble;

/// All computed outputs of a single generation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub set: GeneratedSet,
    pub diagnostics: Vec<PairDiagnostics>,
}

/// Execute the full generation pipeline and return the computed outputs.
pub fn run_generation(config: &GenConfig) -> Result<RunOutput, AppError> {
    let set = assemble(config)?;
    let diagnostics = compute_diagnostics(&set)?;
    Ok(RunOutput { set, diagnostics })
}
