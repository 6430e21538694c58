// File: crates/chart-core/src/raster.rs
// Summary: SVG -> PNG rasterization via resvg/tiny-skia (CPU, no native deps).

use resvg::{tiny_skia, usvg};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid svg: {0}")]
    Parse(#[from] usvg::Error),
    #[error("cannot allocate a {width}x{height} pixmap")]
    Allocate { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// Rasterize an SVG document at `dpr` pixels per logical unit and encode it as PNG.
/// Text is skipped: no font database is loaded.
pub fn svg_to_png(svg: &str, dpr: f32) -> Result<Vec<u8>, RasterError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    let scale = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(RasterError::Allocate { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    pixmap.encode_png().map_err(|e| RasterError::Encode(e.to_string()))
}
