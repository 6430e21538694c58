// File: crates/export/src/lib.rs
// Summary: CSV ingestion and file export used by the waterflow-export binary.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chart_core::{Chart, ChartKind, NegativePolicy, RenderOptions, Sample};
use tracing::{debug, info};
use waterflow_dashboard::{render_document, Pages, Route, ShellState};

/// Load a `label,value` CSV with a header row into validated samples.
/// Rows are kept in file order; the first invalid value aborts the load.
pub fn load_samples_csv(path: &Path, policy: NegativePolicy) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let mut samples = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let line = i + 2;
        let record = record.with_context(|| format!("reading line {line}"))?;
        let label = record.get(0).unwrap_or_default();
        let raw = record.get(1).unwrap_or_default();
        let sample = Sample::parse(label, raw, policy).with_context(|| format!("line {line}"))?;
        samples.push(sample);
    }
    if samples.is_empty() {
        bail!("no samples loaded from {}; check the header and delimiter", path.display());
    }
    info!(path = %path.display(), count = samples.len(), "loaded samples");
    Ok(samples)
}

/// Seeded data used when no CSV is given: the weekly trend for line charts,
/// the hourly pattern for bar charts.
pub fn default_chart(kind: ChartKind) -> Chart {
    let pages = Pages::seed();
    match kind {
        ChartKind::Line => pages.dashboard.trend_chart(),
        ChartKind::Bar => pages.usage.hourly_chart(),
    }
}

/// Write `<stem>.svg` (and `<stem>.png` when `png` is set) into `out`. Returns the written paths.
pub fn write_chart(chart: &Chart, opts: &RenderOptions, out: &Path, stem: &str, png: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let svg = out.join(format!("{stem}.svg"));
    chart.render_to_svg(opts, &svg)?;
    info!(path = %svg.display(), "wrote chart");
    written.push(svg);
    if png {
        let path = out.join(format!("{stem}.png"));
        chart.render_to_png(opts, &path)?;
        info!(path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}

/// Write one HTML document per route into `out`, each with that route active.
pub fn write_pages(pages: &Pages, opts: &RenderOptions, sidebar_open: bool, out: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out).with_context(|| format!("create output dir {}", out.display()))?;
    let mut written = Vec::with_capacity(Route::ALL.len());
    for route in Route::ALL {
        let shell = ShellState::new(route, sidebar_open);
        let html = render_document(&shell, pages, opts).with_context(|| format!("render page {}", route.path()))?;
        let path = out.join(route.file_name());
        std::fs::write(&path, html).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), route = route.path(), "wrote page");
        written.push(path);
    }
    Ok(written)
}
