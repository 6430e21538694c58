// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the sample model, coordinate mapper and chart rendering.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod mapper;
pub mod raster;
pub mod sample;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use error::{MapError, SampleError};
pub use mapper::{map, map_bars, map_line, ChartKind, PlotShapes};
pub use sample::{ingest, NegativePolicy, Sample};
pub use theme::Theme;
pub use types::{BarLayout, CanvasSpec, PlotBar, PlotPoint};
