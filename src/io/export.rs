//! Export the generated dataset to CSV.
//!
//! The output is the contract consumed by backtest harnesses:
//! header `Date, A1, B1, ..., C1`, dates in `YYYY-MM-DD` form, one row per
//! trading day, no missing cells. Numeric cells use a fixed precision so a
//! seeded run exports byte-identically.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Dataset;
use crate::error::AppError;

/// Render the dataset as CSV text.
pub fn dataset_to_csv(dataset: &Dataset) -> String {
    let mut out = String::new();

    out.push_str("Date");
    for column in &dataset.columns {
        out.push(',');
        out.push_str(&column.symbol);
    }
    out.push('\n');

    for (i, date) in dataset.dates.iter().enumerate() {
        out.push_str(&date.to_string());
        for column in &dataset.columns {
            out.push_str(&format!(",{:.6}", column.values[i]));
        }
        out.push('\n');
    }

    out
}

/// Write the dataset to a CSV file.
pub fn write_dataset_csv(path: &Path, dataset: &Dataset) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create dataset CSV '{}': {e}", path.display()),
        )
    })?;

    file.write_all(dataset_to_csv(dataset).as_bytes())
        .map_err(|e| AppError::new(2, format!("Failed to write dataset CSV: {e}")))?;

    Ok(())
}
