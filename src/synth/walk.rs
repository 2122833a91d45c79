//! Multiplicative random-walk price paths.
//!
//! Each step draws a return from `N(drift, volatility)` and the path is the
//! running product of `(1 + return)` scaled by `BASE_PRICE`. This is a
//! geometric random walk: a unit-root process with no stationarity guarantee,
//! used as the base leg that a cointegrating partner is constructed against.
//!
//! The model does not clamp steps. For realistic volatility scales a draw
//! below -100% has negligible probability; if it does happen the path is
//! rejected with a numeric error rather than silently corrected.

use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{BASE_PRICE, WalkParams};
use crate::error::AppError;

/// Validate walk parameters without drawing anything.
pub fn validate_walk_params(params: &WalkParams) -> Result<(), AppError> {
    if !params.drift.is_finite() {
        return Err(AppError::invalid_argument(format!(
            "Drift must be finite, got {}.",
            params.drift
        )));
    }
    if !(params.volatility.is_finite() && params.volatility >= 0.0) {
        return Err(AppError::invalid_argument(format!(
            "Volatility must be finite and >= 0, got {}.",
            params.volatility
        )));
    }
    Ok(())
}

/// Generate a price path of `n_steps` strictly positive values.
///
/// The first value is already the result of one random step, so it sits near
/// (not exactly at) `BASE_PRICE`.
pub fn random_walk(
    n_steps: usize,
    params: &WalkParams,
    rng: &mut StdRng,
) -> Result<Vec<f64>, AppError> {
    if n_steps == 0 {
        return Err(AppError::invalid_argument("Step count must be > 0."));
    }
    validate_walk_params(params)?;

    let normal = Normal::new(params.drift, params.volatility)
        .map_err(|e| AppError::invalid_argument(format!("Return distribution error: {e}")))?;

    let mut path = Vec::with_capacity(n_steps);
    let mut level = BASE_PRICE;
    for i in 0..n_steps {
        let step = normal.sample(rng);
        level *= 1.0 + step;
        if !(level.is_finite() && level > 0.0) {
            return Err(AppError::numeric(format!(
                "Random walk became non-positive at step {i} (return {step:.6}); \
                 volatility is too large for the multiplicative model."
            )));
        }
        path.push(level);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn walk_has_requested_length_and_positive_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let path = random_walk(252, &WalkParams::pair_default(), &mut rng).unwrap();
        assert_eq!(path.len(), 252);
        for v in &path {
            assert!(v.is_finite() && *v > 0.0);
        }
    }

    #[test]
    fn walk_starts_near_base_price() {
        let mut rng = StdRng::seed_from_u64(7);
        let path = random_walk(10, &WalkParams::pair_default(), &mut rng).unwrap();
        // One 1%-vol step away from 100.
        assert!((path[0] - BASE_PRICE).abs() < 10.0);
    }

    #[test]
    fn zero_volatility_gives_pure_drift() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = WalkParams {
            drift: 0.01,
            volatility: 0.0,
        };
        let path = random_walk(3, &params, &mut rng).unwrap();
        assert!((path[0] - BASE_PRICE * 1.01).abs() < 1e-9);
        assert!((path[2] - BASE_PRICE * 1.01_f64.powi(3)).abs() < 1e-9);
    }

    #[test]
    fn zero_steps_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = random_walk(0, &WalkParams::pair_default(), &mut rng).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn negative_volatility_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = WalkParams {
            drift: 0.0,
            volatility: -0.5,
        };
        let err = random_walk(5, &params, &mut rng).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
