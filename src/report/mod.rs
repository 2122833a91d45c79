//! Reporting utilities: per-pair diagnostics and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the generation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use crate::domain::GeneratedSet;
use crate::error::AppError;
use crate::math::{pair_spread, regress, sample_variance};

/// Verification numbers derived from one generated pair.
///
/// `recovered_beta` comes from regressing the cointegrated leg on the base
/// leg; for a well-formed pair it should sit within a few percent of
/// `designed_beta`, and `spread_variance` should be materially smaller than
/// `base_variance` (the error process, not the base walk, dominates the
/// spread).
#[derive(Debug, Clone)]
pub struct PairDiagnostics {
    pub base_symbol: String,
    pub coint_symbol: String,
    pub designed_beta: f64,
    pub recovered_beta: f64,
    pub r_squared: f64,
    pub shift: f64,
    pub spread_variance: f64,
    pub base_variance: f64,
}

/// Compute diagnostics for every pair in a generated set.
pub fn compute_diagnostics(set: &GeneratedSet) -> Result<Vec<PairDiagnostics>, AppError> {
    set.pairs
        .iter()
        .map(|pair| {
            let fit = regress(&pair.base, &pair.coint).ok_or_else(|| {
                AppError::numeric(format!(
                    "Degenerate regression for pair {}/{}.",
                    pair.base_symbol, pair.coint_symbol
                ))
            })?;
            let spread = pair_spread(&pair.base, &pair.coint, pair.beta, pair.shift);
            Ok(PairDiagnostics {
                base_symbol: pair.base_symbol.clone(),
                coint_symbol: pair.coint_symbol.clone(),
                designed_beta: pair.beta,
                recovered_beta: fit.beta,
                r_squared: fit.r_squared,
                shift: pair.shift,
                spread_variance: sample_variance(&spread),
                base_variance: sample_variance(&pair.base),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorParams, GenConfig, WalkParams};
    use crate::synth::assemble;

    fn config(n_days: usize, n_pairs: usize, seed: u64) -> GenConfig {
        GenConfig {
            n_days,
            n_pairs,
            seed: Some(seed),
            start_date: None,
            walk: WalkParams::pair_default(),
            error: ErrorParams::default(),
            control: WalkParams::control_default(),
            plot: false,
            plot_width: 100,
            plot_height: 25,
            output: None,
            manifest: None,
        }
    }

    #[test]
    fn regression_recovers_designed_beta() {
        let set = assemble(&config(252, 3, 42)).unwrap();
        let diagnostics = compute_diagnostics(&set).unwrap();
        assert_eq!(diagnostics.len(), 3);
        for d in &diagnostics {
            assert!(
                (d.recovered_beta - d.designed_beta).abs() < 0.05,
                "{}/{}: designed {:.4}, recovered {:.4}",
                d.base_symbol,
                d.coint_symbol,
                d.designed_beta,
                d.recovered_beta
            );
            assert!(d.r_squared > 0.95);
        }
    }

    #[test]
    fn spread_variance_is_dominated_by_error_process() {
        let set = assemble(&config(252, 2, 7)).unwrap();
        let diagnostics = compute_diagnostics(&set).unwrap();
        for d in &diagnostics {
            assert!(
                d.spread_variance * 10.0 < d.base_variance,
                "{}: spread var {:.6} vs base var {:.6}",
                d.base_symbol,
                d.spread_variance,
                d.base_variance
            );
        }
    }

    #[test]
    fn control_is_not_cointegrated_with_pairs() {
        // The control column follows its own walk; regressing it on a base
        // leg should explain far less variance than a designed pair does.
        let set = assemble(&config(252, 1, 11)).unwrap();
        let base = set.dataset.column("A1").unwrap();
        let coint = set.dataset.column("B1").unwrap();
        let control = set.dataset.column("C1").unwrap();

        let designed = regress(base, coint).unwrap();
        let spurious = regress(base, control).unwrap();
        assert!(designed.r_squared > spurious.r_squared);
        assert!(designed.r_squared > 0.95);
    }
}
