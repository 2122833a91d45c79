//! Formatted terminal output for generation runs.

use crate::domain::{GenConfig, GeneratedSet};
use crate::report::PairDiagnostics;

/// Format the full run summary (config echo + dataset shape).
pub fn format_run_summary(set: &GeneratedSet, config: &GenConfig) -> String {
    let mut out = String::new();

    out.push_str("=== pairsynth - Cointegrated Pair Fixture Generator ===\n");
    out.push_str(&format!(
        "Days: {} | Pairs: {} | Seed: {}\n",
        config.n_days,
        config.n_pairs,
        match config.seed {
            Some(seed) => seed.to_string(),
            None => "(entropy)".to_string(),
        }
    ));

    if let (Some(first), Some(last)) = (set.dataset.dates.first(), set.dataset.dates.last()) {
        out.push_str(&format!("Calendar: {first} .. {last} (weekends skipped)\n"));
    }

    out.push_str(&format!(
        "Walk: drift={} vol={} | Error: persistence={} vol={} | Control: drift={} vol={}\n",
        config.walk.drift,
        config.walk.volatility,
        config.error.persistence,
        config.error.innovation_vol,
        config.control.drift,
        config.control.volatility,
    ));

    out.push_str(&format!(
        "Columns: Date, {}\n",
        set.dataset.symbols().join(", ")
    ));
    out.push('\n');

    out
}

/// Format the per-pair diagnostics table.
pub fn format_pair_table(diagnostics: &[PairDiagnostics]) -> String {
    let mut out = String::new();

    out.push_str("Pair diagnostics:\n");
    if diagnostics.is_empty() {
        out.push_str("(no pairs generated)\n");
        return out;
    }

    out.push_str(
        format!(
            "{:<10} {:>10} {:>10} {:>8} {:>10} {:>14} {:>14}\n",
            "pair", "beta", "beta_hat", "r2", "shift", "var(spread)", "var(base)"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<10} {:-<10} {:-<10} {:-<8} {:-<10} {:-<14} {:-<14}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for d in diagnostics {
        out.push_str(
            format!(
                "{:<10} {:>10.4} {:>10.4} {:>8.4} {:>10.4} {:>14.6} {:>14.6}\n",
                format!("{}/{}", d.base_symbol, d.coint_symbol),
                d.designed_beta,
                d.recovered_beta,
                d.r_squared,
                d.shift,
                d.spread_variance,
                d.base_variance,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_table_handles_empty_input() {
        let txt = format_pair_table(&[]);
        assert!(txt.contains("(no pairs generated)"));
    }

    #[test]
    fn pair_table_lists_each_pair_once() {
        let diagnostics = vec![
            PairDiagnostics {
                base_symbol: "A1".to_string(),
                coint_symbol: "B1".to_string(),
                designed_beta: 0.8,
                recovered_beta: 0.7991,
                r_squared: 0.999,
                shift: 0.0,
                spread_variance: 0.0002,
                base_variance: 4.2,
            },
            PairDiagnostics {
                base_symbol: "A2".to_string(),
                coint_symbol: "B2".to_string(),
                designed_beta: 1.3,
                recovered_beta: 1.3014,
                r_squared: 0.998,
                shift: 12.5,
                spread_variance: 0.0003,
                base_variance: 3.1,
            },
        ];
        let txt = format_pair_table(&diagnostics);
        assert!(txt.contains("A1/B1"));
        assert!(txt.contains("A2/B2"));
        assert!(txt.contains("12.5000"));
    }
}
