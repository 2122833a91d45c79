//! Least-squares regression.
//!
//! Used by the diagnostics layer to recover the designed beta of a generated
//! pair: regressing the cointegrated leg on the base leg should reproduce the
//! coefficient the pair was built with (the positivity shift only moves the
//! intercept).
//!
//! Implementation choices:
//! - SVD solve, which handles the tall (n rows x 2 columns) design matrix
//!   robustly. (Nalgebra's `QR::solve` is intended for square systems and
//!   will panic for non-square matrices.)
//! - Progressively looser tolerances so near-degenerate inputs (e.g. a flat
//!   base series) degrade to `None` instead of a panic.

use nalgebra::{DMatrix, DVector};

use crate::math::stats::mean;

/// OLS fit of `y = alpha + beta * x`.
#[derive(Debug, Clone, Copy)]
pub struct RegressionFit {
    pub alpha: f64,
    pub beta: f64,
    pub r_squared: f64,
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Fit `y = alpha + beta * x` by ordinary least squares.
pub fn regress(x: &[f64], y: &[f64]) -> Option<RegressionFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len();
    let mut design = DMatrix::zeros(n, 2);
    for (i, &xi) in x.iter().enumerate() {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = xi;
    }
    let yv = DVector::from_column_slice(y);

    let coef = solve_least_squares(&design, &yv)?;
    let alpha = coef[0];
    let beta = coef[1];

    let y_mean = mean(y);
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for i in 0..n {
        let fitted = alpha + beta * x[i];
        ss_res += (y[i] - fitted) * (y[i] - fitted);
        ss_tot += (y[i] - y_mean) * (y[i] - y_mean);
    }
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    };

    Some(RegressionFit {
        alpha,
        beta,
        r_squared,
    })
}
