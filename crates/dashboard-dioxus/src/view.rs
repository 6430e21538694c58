// File: crates/dashboard-dioxus/src/view.rs
// Summary: Chart view model: mapper output plus the decorations the SvgChart component draws.

use chart_core::geometry::{fmt_num, points_attr};
use chart_core::grid::horizontal_gridlines;
use chart_core::{Chart, ChartKind, MapError, PlotShapes, RenderOptions, Theme};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub class: &'static str,
    pub view_box: String,
    pub width: f64,
    pub gridlines: Vec<f64>,
    pub shapes: PlotShapes,
    /// `points` attribute of the polyline; empty in bar mode.
    pub points: String,
    pub gradient_id: String,
    /// Paint for the polyline or bars.
    pub paint: String,
    /// Opacity of the gradient's bottom stop.
    pub fade: String,
    /// Vertical then horizontal axis as `(x1, y1, x2, y2)`.
    pub axes: Option<[(f64, f64, f64, f64); 2]>,
    pub dot_radius: f64,
    pub legend: Vec<String>,
    pub theme: Theme,
}

impl ChartView {
    pub fn build(chart: &Chart, opts: &RenderOptions) -> Result<Self, MapError> {
        let shapes = chart.shapes(opts)?;
        let c = &opts.canvas;
        let t = opts.theme;

        let (class, gradient_id, fade) = match chart.kind {
            ChartKind::Line => ("line-chart", format!("ui-lineGradient-{}", t.name), t.line_fade),
            ChartKind::Bar => ("bar-chart", format!("ui-barGradient-{}", t.name), 1.0),
        };
        let (points, flat) = match &shapes {
            PlotShapes::Points(p) => (points_attr(p), p.windows(2).all(|w| w[0].y == w[1].y)),
            PlotShapes::Bars(_) => (String::new(), false),
        };
        // Gradients do not paint a zero-height polyline.
        let paint = if flat { t.accent_start.to_string() } else { format!("url(#{gradient_id})") };
        let axes = opts.draw_axes.then(|| {
            let base = c.baseline();
            [(c.margin_left, c.margin_left.min(base), c.margin_left, base), (c.margin_left, base, c.width, base)]
        });

        Ok(Self {
            class,
            view_box: format!("0 0 {} {}", fmt_num(c.width), fmt_num(c.height)),
            width: c.width,
            gridlines: horizontal_gridlines(c, opts.gridlines),
            shapes,
            points,
            gradient_id,
            paint,
            fade: fmt_num(fade as f64),
            axes,
            dot_radius: opts.dot_radius,
            legend: chart.legend_entries("L"),
            theme: t,
        })
    }
}
