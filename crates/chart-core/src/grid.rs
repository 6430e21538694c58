// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::types::CanvasSpec;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// y positions of horizontal grid lines: `count` rows ending on the baseline,
/// spaced by `plot_height / (count - 1)` starting at `margin_top`.
/// The default canvas yields 50, 100, 150, 200, 250.
pub fn horizontal_gridlines(canvas: &CanvasSpec, count: usize) -> Vec<f64> {
    if count == 0 { return Vec::new(); }
    if count == 1 { return vec![canvas.baseline()]; }
    linspace(canvas.margin_top, canvas.baseline(), count)
}
