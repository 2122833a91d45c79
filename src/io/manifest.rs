//! Write dataset manifest JSON files.
//!
//! The manifest is the "portable" description of a generated fixture:
//! seed, calendar anchor, and the designed `(beta, shift)` of every pair.
//! Verification tooling can read it back instead of re-estimating betas.
//!
//! The schema is defined by `domain::DatasetManifest`.

use std::fs::File;
use std::path::Path;

use crate::domain::{CONTROL_SYMBOL, DatasetManifest, GeneratedSet, PairSpec};
use crate::error::AppError;

/// Build the manifest for a generated set.
pub fn build_manifest(set: &GeneratedSet) -> Result<DatasetManifest, AppError> {
    let start_date = set
        .dataset
        .dates
        .first()
        .copied()
        .ok_or_else(|| AppError::numeric("Generated dataset has no calendar rows."))?;

    Ok(DatasetManifest {
        tool: "pairsynth".to_string(),
        n_days: set.dataset.n_rows(),
        n_pairs: set.pairs.len(),
        seed: set.seed,
        start_date,
        pairs: set.pairs.iter().map(PairSpec::from).collect(),
        control_symbol: CONTROL_SYMBOL.to_string(),
    })
}

/// Write a manifest JSON file.
pub fn write_manifest(path: &Path, set: &GeneratedSet) -> Result<(), AppError> {
    let manifest = build_manifest(set)?;

    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create manifest JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(file, &manifest)
        .map_err(|e| AppError::new(2, format!("Failed to write manifest JSON: {e}")))?;

    Ok(())
}
