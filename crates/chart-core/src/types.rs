// File: crates/chart-core/src/types.rs
// Summary: Shared plot types and layout constants (canvas, margins, bar layout, primitives).

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Default logical canvas width.
pub const WIDTH: f64 = 700.0;
/// Default logical canvas height.
pub const HEIGHT: f64 = 300.0;

/// Fixed logical drawing area plus the margins that carve out the plottable area.
/// Contract: finite, positive size; margins non-negative and leave a
/// non-negative plottable width and height (see [`CanvasSpec::validate`]).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl CanvasSpec {
    pub const fn new(width: f64, height: f64, margin_top: f64, margin_bottom: f64, margin_left: f64) -> Self {
        Self { width, height, margin_top, margin_bottom, margin_left }
    }

    /// Plottable width. The left margin is mirrored on the right.
    pub fn plot_width(&self) -> f64 { self.width - 2.0 * self.margin_left }
    /// Plottable height.
    pub fn plot_height(&self) -> f64 { self.height - self.margin_top - self.margin_bottom }
    /// y-coordinate of a zero value.
    pub fn baseline(&self) -> f64 { self.height - self.margin_bottom }

    /// Check the layout contract. Every mapper entry point calls this first.
    pub fn validate(&self) -> Result<(), MapError> {
        let all = [self.width, self.height, self.margin_top, self.margin_bottom, self.margin_left];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(MapError::InvalidCanvas("non-finite dimension"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(MapError::InvalidCanvas("width and height must be positive"));
        }
        if self.margin_top < 0.0 || self.margin_bottom < 0.0 || self.margin_left < 0.0 {
            return Err(MapError::InvalidCanvas("margins must be non-negative"));
        }
        if self.plot_width() < 0.0 {
            return Err(MapError::InvalidCanvas("left margins exceed canvas width"));
        }
        if self.plot_height() < 0.0 {
            return Err(MapError::InvalidCanvas("vertical margins exceed canvas height"));
        }
        Ok(())
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, 50.0, 50.0, 25.0)
    }
}

/// Bar-mode layout constants. Bars do not stretch with the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarLayout {
    /// x of the first bar's left edge.
    pub origin_x: f64,
    pub bar_width: f64,
    /// Distance between consecutive bars' left edges.
    pub spacing: f64,
}

impl BarLayout {
    pub const fn new(origin_x: f64, bar_width: f64, spacing: f64) -> Self {
        Self { origin_x, bar_width, spacing }
    }

    /// Right edge of the last of `count` bars.
    pub fn extent(&self, count: usize) -> f64 {
        if count == 0 { return self.origin_x; }
        self.origin_x + (count - 1) as f64 * self.spacing + self.bar_width
    }

    /// Largest bar count that fits inside `width`.
    pub fn capacity(&self, width: f64) -> usize {
        let room = width - self.origin_x - self.bar_width;
        if room < 0.0 { return 0; }
        if self.spacing <= 0.0 { return usize::MAX; }
        (room / self.spacing).floor() as usize + 1
    }
}

impl Default for BarLayout {
    fn default() -> Self {
        Self::new(50.0, 60.0, 90.0)
    }
}

/// A coordinate in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// A bar rectangle in canvas space; spans `[x, x+width] × [y, y+height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlotBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBar {
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn right(&self) -> f64 { self.x + self.width }
}
