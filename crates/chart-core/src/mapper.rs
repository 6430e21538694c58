// File: crates/chart-core/src/mapper.rs
// Summary: Chart coordinate mapper; turns ordered samples into line points or bar rectangles.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::geometry::clamp;
use crate::sample::{max_value, Sample};
use crate::scale::{IndexScale, ValueScale};
use crate::types::{BarLayout, CanvasSpec, PlotBar, PlotPoint};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

/// Output of [`map`]: one primitive per sample, in input order.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotShapes {
    Points(Vec<PlotPoint>),
    Bars(Vec<PlotBar>),
}

impl PlotShapes {
    pub fn len(&self) -> usize {
        match self {
            PlotShapes::Points(p) => p.len(),
            PlotShapes::Bars(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

fn value_scale(samples: &[Sample], canvas: &CanvasSpec) -> Result<ValueScale, MapError> {
    canvas.validate()?;
    let vmax = max_value(samples).ok_or(MapError::EmptyInput)?;
    Ok(ValueScale::new(canvas.margin_top, canvas.baseline(), vmax))
}

/// Line mode: x spreads samples across the plottable width, y scales by the series maximum.
pub fn map_line(samples: &[Sample], canvas: &CanvasSpec) -> Result<Vec<PlotPoint>, MapError> {
    let ys = value_scale(samples, canvas)?;
    let xs = IndexScale::new(canvas.margin_left, canvas.plot_width(), samples.len());

    Ok(samples
        .iter()
        .enumerate()
        .map(|(i, s)| PlotPoint {
            x: clamp(xs.to_px(i), 0.0, canvas.width),
            y: ys.to_px(s.value()),
        })
        .collect())
}

/// Bar mode: fixed-width bars packed from `layout.origin_x`, each rising from the baseline.
pub fn map_bars(samples: &[Sample], canvas: &CanvasSpec, layout: &BarLayout) -> Result<Vec<PlotBar>, MapError> {
    let ys = value_scale(samples, canvas)?;
    let needed = layout.extent(samples.len());
    if layout.origin_x < 0.0 || layout.bar_width < 0.0 || layout.spacing < 0.0 || needed.is_nan() || needed > canvas.width {
        return Err(MapError::BarsOverflow { count: samples.len(), needed, available: canvas.width });
    }
    let baseline = canvas.baseline();

    Ok(samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let height = ys.extent(s.value());
            PlotBar {
                x: layout.origin_x + i as f64 * layout.spacing,
                y: baseline - height,
                width: layout.bar_width,
                height,
            }
        })
        .collect())
}

/// Dispatch on chart kind.
pub fn map(samples: &[Sample], canvas: &CanvasSpec, layout: &BarLayout, kind: ChartKind) -> Result<PlotShapes, MapError> {
    match kind {
        ChartKind::Line => map_line(samples, canvas).map(PlotShapes::Points),
        ChartKind::Bar => map_bars(samples, canvas, layout).map(PlotShapes::Bars),
    }
}
