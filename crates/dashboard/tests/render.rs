// File: crates/dashboard/tests/render.rs
// Purpose: Static HTML output of every page and the document shell.

use chart_core::RenderOptions;
use waterflow_dashboard::pages::users::{DraftField, UsersAction};
use waterflow_dashboard::pages::SettingsAction;
use waterflow_dashboard::{render_document, render_page, Pages, Reducer, Route, ShellState};

#[test]
fn every_route_renders_with_its_header() {
    let pages = Pages::seed();
    let opts = RenderOptions::default();
    for route in Route::ALL {
        let html = render_page(route, &pages, &opts).expect("render page");
        assert!(html.contains(&format!("<h2>{}</h2>", route.title().replace('&', "&amp;"))), "{route:?}");
    }
}

#[test]
fn dashboard_embeds_line_chart_and_legend() {
    let html = render_page(Route::Dashboard, &Pages::seed(), &RenderOptions::default()).expect("render");
    assert!(html.contains(r#"class="line-chart""#));
    assert!(html.contains(r#"<span class="legend-item">Sun: 245L</span>"#));
    assert!(html.contains(r#"<span class="stat-main-value">245.5</span>"#));
    assert!(html.contains(r#"style="width: 100%""#));
    assert!(html.contains("⚠️ Alert"));
}

#[test]
fn usage_page_embeds_bar_chart_and_breakdown() {
    let html = render_page(Route::Usage, &Pages::seed(), &RenderOptions::default()).expect("render");
    assert!(html.contains(r#"class="bar-chart""#));
    assert!(html.contains("Current Zone Usage: All Zones"));
    assert!(html.contains(r#"<option value="week" selected="selected">This Week</option>"#));
    assert!(html.contains("<td>31.8%</td>"));
    assert!(html.contains(r#"class="zone-button active""#));
}

#[test]
fn alerts_page_shows_empty_state_when_everything_is_resolved() {
    let mut pages = Pages::seed();
    let ids: Vec<u32> = pages.alerts.active().iter().map(|a| a.id).collect();
    for id in ids {
        pages.alerts = pages.alerts.reduce(waterflow_dashboard::pages::AlertsAction::Resolve(id));
    }
    let html = render_page(Route::Alerts, &pages, &RenderOptions::default()).expect("render");
    assert!(html.contains("No Active Alerts"));
    assert!(html.contains("Resolved Alerts (5)"));
}

#[test]
fn user_supplied_text_is_escaped() {
    let mut pages = Pages::seed();
    pages.users = pages
        .users
        .reduce(UsersAction::EditDraft(DraftField::Name("<script>x</script>".into())))
        .reduce(UsersAction::EditDraft(DraftField::Email("a@b.c".into())))
        .reduce(UsersAction::Add);
    let html = render_page(Route::Users, &pages, &RenderOptions::default()).expect("render");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
}

#[test]
fn settings_notice_follows_state() {
    let mut pages = Pages::seed();
    let opts = RenderOptions::default();
    let html = render_page(Route::Settings, &pages, &opts).expect("render");
    assert!(!html.contains("success-message"));

    pages.settings = pages.settings.reduce(SettingsAction::Save);
    let html = render_page(Route::Settings, &pages, &opts).expect("render");
    assert!(html.contains("Settings saved successfully!"));
    assert!(html.contains("February 10, 2026"));
}

#[test]
fn document_marks_active_route_and_sidebar_state() {
    let shell = ShellState::new(Route::Reports, false);
    let html = render_document(&shell, &Pages::seed(), &RenderOptions::default()).expect("render");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>WaterFlow Management System</h1>"));
    assert!(html.contains(r#"<a href="reports.html" class="nav-link active">"#));
    assert!(html.contains(r#"<a href="index.html" class="nav-link">"#));
    assert!(html.contains(r#"<aside class="sidebar closed">"#));
    assert!(html.contains("System Status"));
    assert!(html.ends_with("</html>"));
}

#[test]
fn chart_failures_surface_as_errors() {
    let mut pages = Pages::seed();
    pages.usage.hourly.clear();
    let err = render_page(Route::Usage, &pages, &RenderOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("empty"));
}
