//! Trading-day calendar generation.
//!
//! Walks forward one calendar day at a time from a start date, keeping only
//! Monday through Friday until the requested count is collected. Weekends are
//! silently skipped, never counted. Deterministic; contains no randomness.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::AppError;

/// Fixed epoch used when no start date is supplied.
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid epoch date")
}

/// Generate `n_days` consecutive business-day labels.
pub fn trading_days(n_days: usize, start: Option<NaiveDate>) -> Result<Vec<NaiveDate>, AppError> {
    if n_days == 0 {
        return Err(AppError::invalid_argument(
            "Number of trading days must be > 0.",
        ));
    }

    let mut current = start.unwrap_or_else(default_start);
    let mut out = Vec::with_capacity(n_days);

    while out.len() < n_days {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(current);
        }
        current = current.succ_opt().ok_or_else(|| {
            AppError::numeric("Calendar overflow while generating trading days.")
        })?;
    }

    Ok(out)
}
