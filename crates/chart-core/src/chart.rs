// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and rendering pipeline (mapper output -> SVG document -> optional PNG).

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::MapError;
use crate::geometry::fmt_num;
use crate::grid::horizontal_gridlines;
use crate::mapper::{map, ChartKind, PlotShapes};
use crate::raster;
use crate::sample::{max_value, Sample};
use crate::scale::ValueScale;
use crate::svg::SvgWriter;
use crate::theme::Theme;
use crate::types::{BarLayout, CanvasSpec, PlotPoint};

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub canvas: CanvasSpec,
    pub bar_layout: BarLayout,
    pub theme: Theme,
    pub dot_radius: f64,
    /// Number of horizontal grid lines, baseline included.
    pub gridlines: usize,
    pub draw_axes: bool,
    pub draw_value_labels: bool,
    /// Pixel density for PNG output.
    pub dpr: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::default(),
            bar_layout: BarLayout::default(),
            theme: Theme::light(),
            dot_radius: 5.0,
            gridlines: 5,
            draw_axes: true,
            draw_value_labels: false,
            dpr: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub samples: Vec<Sample>,
    pub kind: ChartKind,
    pub title: Option<String>,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self { samples: Vec::new(), kind, title: None }
    }

    pub fn with_samples(kind: ChartKind, samples: Vec<Sample>) -> Self {
        Self { samples, kind, title: None }
    }

    pub fn line(samples: Vec<Sample>) -> Self { Self::with_samples(ChartKind::Line, samples) }
    pub fn bar(samples: Vec<Sample>) -> Self { Self::with_samples(ChartKind::Bar, samples) }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Run the mapper for this chart's kind.
    pub fn shapes(&self, opts: &RenderOptions) -> Result<PlotShapes, MapError> {
        map(&self.samples, &opts.canvas, &opts.bar_layout, self.kind)
    }

    /// Legend entries, e.g. `"Mon: 210L"`.
    pub fn legend_entries(&self, unit: &str) -> Vec<String> {
        self.samples
            .iter()
            .map(|s| format!("{}: {}{}", s.label(), fmt_num(s.value()), unit))
            .collect()
    }

    /// Render to an SVG document string.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String, MapError> {
        let shapes = self.shapes(opts)?;
        let c = &opts.canvas;
        let t = &opts.theme;
        let class = match self.kind {
            ChartKind::Line => "line-chart",
            ChartKind::Bar => "bar-chart",
        };

        let mut w = SvgWriter::new(c.width, c.height, class);
        if let Some(title) = &self.title {
            w.title(title);
        }
        w.background(c.width, c.height, t.background);

        for y in horizontal_gridlines(c, opts.gridlines) {
            w.line(0.0, y, c.width, y, t.grid, 1.0);
        }
        if opts.draw_value_labels {
            draw_value_labels(&mut w, &self.samples, opts);
        }

        match &shapes {
            PlotShapes::Points(points) => {
                let id = format!("lineGradient-{}", t.name);
                w.linear_gradient(&id, t.accent_start, t.accent_end, t.line_fade);
                // A flat polyline has a zero-height bounding box, which disables gradient paint.
                let stroke = if is_flat(points) { t.accent_start.to_string() } else { format!("url(#{id})") };
                w.polyline(points, &stroke, 3.0);
                if opts.dot_radius > 0.0 {
                    for p in points {
                        w.circle(p, opts.dot_radius, t.dot_fill);
                    }
                }
            }
            PlotShapes::Bars(bars) => {
                let id = format!("barGradient-{}", t.name);
                w.linear_gradient(&id, t.accent_start, t.accent_end, 1.0);
                let fill = format!("url(#{id})");
                for b in bars {
                    w.bar(b, &fill, 4.0);
                }
            }
        }

        if opts.draw_axes {
            let axis_top = c.margin_left.min(c.baseline());
            w.line(c.margin_left, axis_top, c.margin_left, c.baseline(), t.axis_line, 2.0);
            w.line(c.margin_left, c.baseline(), c.width, c.baseline(), t.axis_line, 2.0);
        }

        debug!(kind = ?self.kind, samples = self.samples.len(), "rendered chart svg");
        Ok(w.finish())
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let svg = self.render_to_svg_string(opts)?;
        write_output(output_svg_path.as_ref(), svg.as_bytes())
    }

    /// Render the chart to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let svg = self.render_to_svg_string(opts)?;
        raster::svg_to_png(&svg, opts.dpr).context("rasterize chart")
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }
}

// ---- helpers ----------------------------------------------------------------

fn is_flat(points: &[PlotPoint]) -> bool {
    match points.first() {
        Some(first) => points.iter().all(|p| p.y == first.y),
        None => true,
    }
}

fn draw_value_labels(w: &mut SvgWriter, samples: &[Sample], opts: &RenderOptions) {
    let c = &opts.canvas;
    let vmax = max_value(samples).unwrap_or(0.0);
    let scale = ValueScale::new(c.margin_top, c.baseline(), vmax);
    for y in horizontal_gridlines(c, opts.gridlines) {
        let label = fmt_num(scale.from_px(y).round());
        w.text(c.margin_left - 4.0, y - 3.0, 10.0, opts.theme.axis_label, "end", &label);
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
