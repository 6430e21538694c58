// File: crates/dashboard/tests/config.rs
// Purpose: JSON configuration parsing, file loading fallbacks and render option mapping.

use chart_core::NegativePolicy;
use waterflow_dashboard::{ConfigError, DashboardConfig, Route};

#[test]
fn empty_object_yields_defaults() {
    let cfg = DashboardConfig::from_json_str("{}").expect("parse");
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(cfg.canvas.width, 700.0);
    assert_eq!(cfg.negative_policy, NegativePolicy::Reject);
}

#[test]
fn fields_override_defaults() {
    let cfg = DashboardConfig::from_json_str(
        r#"{
            "canvas": {"width": 800, "height": 400, "marginTop": 20, "marginBottom": 40, "marginLeft": 30},
            "barLayout": {"originX": 40, "barWidth": 50, "spacing": 70},
            "theme": "dark",
            "negativePolicy": "clamp",
            "initialRoute": "alerts",
            "sidebarOpen": false
        }"#,
    )
    .expect("parse");
    assert_eq!(cfg.canvas.baseline(), 360.0);
    assert_eq!(cfg.bar_layout.spacing, 70.0);
    assert_eq!(cfg.negative_policy, NegativePolicy::Clamp);
    assert_eq!(cfg.shell().route, Route::Alerts);
    assert!(!cfg.shell().sidebar_open);

    let opts = cfg.render_options();
    assert_eq!(opts.theme.name, "dark");
    assert_eq!(opts.canvas.width, 800.0);
}

#[test]
fn unknown_theme_falls_back_to_light() {
    let cfg = DashboardConfig::from_json_str(r#"{"theme":"sepia"}"#).expect("parse");
    assert_eq!(cfg.render_options().theme.name, "light");
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(DashboardConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        DashboardConfig::from_json_str(r#"{"negativePolicy":"ignore"}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn file_loading_handles_missing_and_malformed_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.json");
    assert_eq!(DashboardConfig::load(&missing).expect("defaults"), DashboardConfig::default());

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").expect("write");
    assert!(DashboardConfig::load(&bad).is_err());
    assert_eq!(DashboardConfig::load_or_default(&bad), DashboardConfig::default());

    let good = dir.path().join("good.json");
    let mut cfg = DashboardConfig::default();
    cfg.dot_radius = 3.0;
    cfg.save(&good).expect("save");
    assert_eq!(DashboardConfig::load(&good).expect("load").dot_radius, 3.0);
}
