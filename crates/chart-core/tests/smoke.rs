// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing SVG and PNG files.

use chart_core::sample::from_static;
use chart_core::{Chart, ChartKind, RenderOptions};

#[test]
fn render_smoke_png() {
    let chart = Chart::with_samples(
        ChartKind::Line,
        from_static(&[("Mon", 210.0), ("Tue", 220.0), ("Wed", 205.0), ("Thu", 240.0)]),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (700, 300));
}

#[test]
fn png_scales_with_pixel_density() {
    let chart = Chart::bar(from_static(&[("a", 1.0), ("b", 2.0)]));
    let opts = RenderOptions { dpr: 2.0, ..RenderOptions::default() };
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1400, 600));
}

#[test]
fn render_smoke_svg_file() {
    let mut chart = Chart::new(ChartKind::Bar);
    chart.add_sample(chart_core::Sample::new("a", 3.0).expect("valid"));
    let out = std::path::PathBuf::from("target/test_out/nested/smoke.svg");
    chart.render_to_svg(&RenderOptions::default(), &out).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("read back");
    assert!(text.contains("bar-chart"));
}

#[test]
fn empty_chart_fails_to_render() {
    let chart = Chart::new(ChartKind::Line);
    let err = chart.render_to_png_bytes(&RenderOptions::default()).unwrap_err();
    assert!(err.to_string().contains("empty"));
    assert_eq!(chart.legend_entries("L"), Vec::<String>::new());
}

#[test]
fn legend_entries_carry_units() {
    let chart = Chart::line(from_static(&[("Mon", 210.0), ("Tue", 245.5)]));
    assert_eq!(chart.legend_entries("L"), vec!["Mon: 210L", "Tue: 245.5L"]);
}
