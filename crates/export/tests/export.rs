// File: crates/export/tests/export.rs
// Purpose: CSV ingestion, chart files and static page export into a temp directory.

use chart_core::{ChartKind, NegativePolicy, RenderOptions};
use waterflow_dashboard::Pages;
use waterflow_export::{default_chart, load_samples_csv, write_chart, write_pages};

fn write_csv(dir: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write csv");
    path
}

#[test]
fn csv_rows_load_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "week.csv", "label,value\nMon, 210\nTue,245\nWed,220.5\n");
    let samples = load_samples_csv(&path, NegativePolicy::Reject).expect("load");
    let labels: Vec<&str> = samples.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Mon", "Tue", "Wed"]);
    assert_eq!(samples[2].value(), 220.5);
}

#[test]
fn negative_rows_follow_policy() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "neg.csv", "label,value\nMon,10\nTue,-3\n");
    let err = load_samples_csv(&path, NegativePolicy::Reject).unwrap_err();
    assert!(format!("{err:#}").contains("line 3"));

    let samples = load_samples_csv(&path, NegativePolicy::Clamp).expect("clamped");
    assert_eq!(samples[1].value(), 0.0);
}

#[test]
fn missing_and_unparseable_values_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blank = write_csv(dir.path(), "blank.csv", "label,value\nMon,\n");
    assert!(format!("{:#}", load_samples_csv(&blank, NegativePolicy::Reject).unwrap_err()).contains("unparseable"));

    let text = write_csv(dir.path(), "text.csv", "label,value\nMon,lots\n");
    assert!(load_samples_csv(&text, NegativePolicy::Reject).is_err());

    let empty = write_csv(dir.path(), "empty.csv", "label,value\n");
    assert!(load_samples_csv(&empty, NegativePolicy::Reject).is_err());

    assert!(load_samples_csv(&dir.path().join("nope.csv"), NegativePolicy::Reject).is_err());
}

#[test]
fn chart_files_are_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out");
    let written = write_chart(&default_chart(ChartKind::Bar), &RenderOptions::default(), &out, "hourly", true)
        .expect("write chart");
    assert_eq!(written, vec![out.join("hourly.svg"), out.join("hourly.png")]);

    let svg = std::fs::read_to_string(&written[0]).expect("read svg");
    assert!(svg.contains(r#"class="bar-chart""#));
    let png = std::fs::read(&written[1]).expect("read png");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn pages_are_written_per_route() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = write_pages(&Pages::seed(), &RenderOptions::default(), true, dir.path()).expect("pages");
    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();
    assert_eq!(names, ["index.html", "usage.html", "alerts.html", "reports.html", "settings.html", "users.html"]);

    let alerts = std::fs::read_to_string(dir.path().join("alerts.html")).expect("read");
    assert!(alerts.contains(r#"<a href="alerts.html" class="nav-link active">"#));
}
