// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for canvas math.

use crate::types::{CanvasSpec, PlotBar, PlotPoint};

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// True when the point lies inside `[0, width] × [0, height]`.
pub fn point_in_canvas(p: &PlotPoint, canvas: &CanvasSpec) -> bool {
    (0.0..=canvas.width).contains(&p.x) && (0.0..=canvas.height).contains(&p.y)
}

/// True when every corner of the bar lies inside the canvas.
pub fn bar_in_canvas(b: &PlotBar, canvas: &CanvasSpec) -> bool {
    b.x >= 0.0 && b.y >= 0.0 && b.right() <= canvas.width && b.bottom() <= canvas.height
}

/// Format points as an SVG `points` attribute ("x,y x,y ...").
pub fn points_attr(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact number formatting for markup: at most two decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
