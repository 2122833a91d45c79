//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - base leg: `-` line (normalized to 100 at the first observation)
//! - cointegrated leg: `*` line (same normalization)
//! - spread: `o` line around a `.` zero axis

use crate::domain::{BASE_PRICE, Pair};
use crate::math::pair_spread;

/// Render both legs of a pair, normalized to a common starting level so the
/// co-movement is visible regardless of the beta scale.
pub fn render_pair_plot(pair: &Pair, width: usize, height: usize) -> String {
    let base = normalize(&pair.base);
    let coint = normalize(&pair.coint);

    let (y_min, y_max) = value_range(&[&base, &coint]).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let width = width.max(10);
    let height = height.max(5);
    let mut grid = vec![vec![' '; width]; height];

    draw_series(&mut grid, &base, y_min, y_max, '-');
    draw_series(&mut grid, &coint, y_min, y_max, '*');

    let mut out = String::new();
    out.push_str(&format!(
        "Pair {}/{}: normalized prices over {} days | '-'={} '*'={}\n",
        pair.base_symbol,
        pair.coint_symbol,
        pair.base.len(),
        pair.base_symbol,
        pair.coint_symbol,
    ));
    push_grid(&mut out, grid);
    out
}

/// Render the designed spread of a pair with a zero axis.
///
/// A healthy pair oscillates around the axis without drifting away from it.
pub fn render_spread_plot(pair: &Pair, width: usize, height: usize) -> String {
    let spread = pair_spread(&pair.base, &pair.coint, pair.beta, pair.shift);

    let (y_min, y_max) = value_range(&[&spread]).unwrap_or((-1.0, 1.0));
    // Always keep the zero axis in frame.
    let (y_min, y_max) = pad_range(y_min.min(0.0), y_max.max(0.0), 0.05);

    let width = width.max(10);
    let height = height.max(5);
    let mut grid = vec![vec![' '; width]; height];

    draw_series(&mut grid, &spread, y_min, y_max, 'o');

    let zero_row = map_y(0.0, y_min, y_max, height);
    for cell in grid[zero_row].iter_mut() {
        if *cell == ' ' {
            *cell = '.';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Spread {} - ({} - shift)/beta: y=[{y_min:.4}, {y_max:.4}]\n",
        pair.base_symbol, pair.coint_symbol,
    ));
    push_grid(&mut out, grid);
    out
}

fn push_grid(out: &mut String, grid: Vec<Vec<char>>) {
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
}

/// Rescale a series to start at `BASE_PRICE`.
fn normalize(values: &[f64]) -> Vec<f64> {
    match values.first() {
        Some(&first) if first != 0.0 => values.iter().map(|v| v / first * BASE_PRICE).collect(),
        _ => values.to_vec(),
    }
}

fn value_range(series: &[&[f64]]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for s in series {
        for &v in *s {
            min_y = min_y.min(v);
            max_y = max_y.max(v);
        }
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(i: usize, n: usize, width: usize) -> usize {
    let width = width.max(2);
    if n < 2 {
        return 0;
    }
    let u = (i as f64 / (n as f64 - 1.0)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_series(grid: &mut [Vec<char>], values: &[f64], y_min: f64, y_max: f64, ch: char) {
    if values.is_empty() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for (i, &v) in values.iter().enumerate() {
        let x = map_x(i, values.len(), width);
        let y = map_y(v, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, ch);
        } else {
            grid[y][x] = ch;
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish). Existing cells are kept, so the
/// first-drawn series wins where lines cross.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
