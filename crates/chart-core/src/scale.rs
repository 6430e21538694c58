// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms used by the mapper.

use crate::geometry::clamp;

/// Horizontal scale spreading `count` evenly spaced indices across `span_px`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub span_px: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f64, span_px: f64, count: usize) -> Self {
        Self { left_px, span_px, count }
    }

    /// A single index sits on the left edge; there is no interval to divide.
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.left_px;
        }
        let t = index as f64 / (self.count - 1) as f64;
        self.left_px + t * self.span_px
    }
}

/// Vertical scale mapping `[0, vmax]` onto `[bottom_px, top_px]`.
/// With `vmax == 0` every value lands on `bottom_px`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f64, bottom_px: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmax }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vmax.is_nan() || self.vmax <= 0.0
    }

    /// Fraction of the plottable height covered by `v`, in `[0, 1]`.
    #[inline]
    pub fn ratio(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        clamp(v / self.vmax, 0.0, 1.0)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - self.ratio(v) * (self.bottom_px - self.top_px)
    }

    /// Distance from the baseline to `to_px(v)`; never negative.
    #[inline]
    pub fn extent(&self, v: f64) -> f64 {
        self.ratio(v) * (self.bottom_px - self.top_px)
    }

    /// Inverse of [`to_px`](Self::to_px) inside the plottable band.
    pub fn from_px(&self, py: f64) -> f64 {
        let span = self.bottom_px - self.top_px;
        if self.is_degenerate() || span <= 0.0 {
            return 0.0;
        }
        (self.bottom_px - py) / span * self.vmax
    }
}
