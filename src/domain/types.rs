//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during generation and diagnostics
//! - exported to CSV/JSON
//! - reloaded later by backtest harnesses for fixture verification

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nominal starting price for every generated path.
///
/// Each path's first observation is `BASE_PRICE * (1 + step_0)`, so it sits
/// near (not exactly at) this level.
pub const BASE_PRICE: f64 = 100.0;

/// Control-series symbol. Generated from independent draws so that
/// cointegration tests run downstream have a true negative to reject.
pub const CONTROL_SYMBOL: &str = "C1";

/// Per-step return distribution for the multiplicative random walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkParams {
    /// Mean of the per-step return (expected per-step growth).
    pub drift: f64,
    /// Standard deviation of the per-step return.
    pub volatility: f64,
}

impl WalkParams {
    /// Defaults for the base leg of each pair.
    pub fn pair_default() -> Self {
        Self {
            drift: 0.0001,
            volatility: 0.01,
        }
    }

    /// Defaults for the uncorrelated control series. Deliberately different
    /// from the pair defaults so the control is visibly its own process.
    pub fn control_default() -> Self {
        Self {
            drift: 0.0003,
            volatility: 0.015,
        }
    }
}

/// AR(1) error-process parameters.
///
/// Stationarity (mean reversion to 0) requires `|persistence| < 1`; the
/// process constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorParams {
    /// Fraction of the previous error carried into the next step.
    pub persistence: f64,
    /// Standard deviation of the per-step innovation.
    pub innovation_vol: f64,
}

impl Default for ErrorParams {
    fn default() -> Self {
        Self {
            persistence: 0.9,
            innovation_vol: 0.005,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Number of trading days (rows) to generate.
    pub n_days: usize,
    /// Number of base/cointegrated column pairs.
    pub n_pairs: usize,
    /// Explicit RNG seed. `None` draws a fresh seed from OS entropy, which
    /// makes the run non-reproducible by design.
    pub seed: Option<u64>,
    /// First calendar date to consider; defaults to the fixture epoch.
    pub start_date: Option<NaiveDate>,

    /// Return distribution for each pair's base leg.
    pub walk: WalkParams,
    /// Error process driving each pair's cointegrated leg.
    pub error: ErrorParams,
    /// Return distribution for the control series.
    pub control: WalkParams,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub output: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// One synthesized base/cointegrated pair with its designed relationship.
///
/// `beta` is drawn once per pair from `[0.5, 1.5)` and retained so tests can
/// compare it against a regression-recovered estimate. `shift` is the
/// positivity correction applied to the cointegrated leg (0 when untouched);
/// it moves the spread's mean but not its stationarity.
#[derive(Debug, Clone)]
pub struct Pair {
    pub base_symbol: String,
    pub coint_symbol: String,
    pub beta: f64,
    pub shift: f64,
    pub base: Vec<f64>,
    pub coint: Vec<f64>,
}

/// A single named price column.
#[derive(Debug, Clone)]
pub struct Column {
    pub symbol: String,
    pub values: Vec<f64>,
}

/// The assembled tabular dataset: a trading calendar plus one price column
/// per symbol, aligned row-for-row.
///
/// Column order is fixed: for each pair `(A{k}, B{k})` interleaved, then the
/// control column last. The `Date` column is the `dates` field itself.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<Column>,
}

impl Dataset {
    pub fn n_rows(&self) -> usize {
        self.dates.len()
    }

    /// Look up a column by symbol.
    pub fn column(&self, symbol: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.symbol == symbol)
            .map(|c| c.values.as_slice())
    }

    /// Column symbols in output order (excluding `Date`).
    pub fn symbols(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.symbol.as_str()).collect()
    }
}

/// Everything produced by one assembly run.
#[derive(Debug, Clone)]
pub struct GeneratedSet {
    pub dataset: Dataset,
    pub pairs: Vec<Pair>,
    /// Seed the run was generated with (`None` when drawn from entropy).
    pub seed: Option<u64>,
}

/// A saved dataset manifest (JSON sidecar).
///
/// Records the designed relationships so a backtest fixture can be verified
/// without re-deriving betas from the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub tool: String,
    pub n_days: usize,
    pub n_pairs: usize,
    pub seed: Option<u64>,
    pub start_date: NaiveDate,
    pub pairs: Vec<PairSpec>,
    pub control_symbol: String,
}

/// The designed relationship of one pair, as stored in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairSpec {
    pub base_symbol: String,
    pub coint_symbol: String,
    pub beta: f64,
    pub shift: f64,
}

impl From<&Pair> for PairSpec {
    fn from(pair: &Pair) -> Self {
        Self {
            base_symbol: pair.base_symbol.clone(),
            coint_symbol: pair.coint_symbol.clone(),
            beta: pair.beta,
            shift: pair.shift,
        }
    }
}
