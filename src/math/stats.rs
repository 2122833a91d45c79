//! Small statistical helpers used by the diagnostics layer.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (n - 1 denominator). NaN for fewer than 2 points.
pub fn sample_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let avg = mean(data);
    let sum_sq: f64 = data.iter().map(|v| (v - avg) * (v - avg)).sum();
    sum_sq / (data.len() - 1) as f64
}

/// Designed spread of a pair: `base - (coint - shift) / beta`.
///
/// Undoing the positivity shift before dividing by beta recovers exactly
/// `-error / beta`, the stationary combination the pair was built around.
pub fn pair_spread(base: &[f64], coint: &[f64], beta: f64, shift: f64) -> Vec<f64> {
    base.iter()
        .zip(coint.iter())
        .map(|(&b, &c)| b - (c - shift) / beta)
        .collect()
}
