// File: crates/dashboard/src/render/mod.rs
// Summary: Static HTML rendering of the dashboard shell and pages, charts embedded as inline SVG.

pub mod html;
mod pages;

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};
use tracing::debug;

use crate::pages::Pages;
use crate::routes::{Route, NAV_ITEMS};
use crate::shell::{ShellState, APP_ICON, APP_TITLE, CURRENT_USER, SYSTEM_STATUS};
use html::HtmlWriter;

/// Stylesheet embedded in every exported document.
pub const STYLE: &str = r#"
*{box-sizing:border-box}body{margin:0;font-family:-apple-system,"Segoe UI",Roboto,sans-serif;background:#f5f7fa;color:#2c3e50}
.navbar{background:linear-gradient(135deg,#667eea,#764ba2);color:#fff;padding:0 20px;height:64px}
.navbar-container{display:flex;align-items:center;justify-content:space-between;height:100%}
.navbar-logo{display:flex;align-items:center;gap:10px}.navbar-logo h1{font-size:20px;margin:0}
.menu-toggle{background:none;border:none;color:#fff;font-size:22px;cursor:pointer}
.main-content{display:flex}
.sidebar{width:240px;background:#2c3e50;min-height:calc(100vh - 64px);display:flex;flex-direction:column;justify-content:space-between}
.sidebar.closed{display:none}
.nav-link{display:flex;gap:12px;padding:14px 20px;color:#ecf0f1;text-decoration:none}
.nav-link.active,.nav-link:hover{background:#34495e}
.sidebar-footer{padding:16px 20px;color:#bdc3c7}.footer-title,.footer-status{margin:0}
.content-wrapper{flex:1;padding:24px}
.page-header h2{margin:0 0 4px}.page-header p{margin:0 0 20px;color:#7f8c8d}
.card,.settings-card{background:#fff;border-radius:10px;padding:20px;margin-bottom:20px;box-shadow:0 2px 8px rgba(0,0,0,.06)}
.stats-grid{display:grid;grid-template-columns:repeat(4,1fr);gap:16px;margin-bottom:20px}
.stat-card{display:flex;gap:12px;background:#fff;border-radius:10px;padding:16px;border-left:4px solid #667eea}
.stat-green{border-color:#27ae60}.stat-cyan{border-color:#1abc9c}.stat-purple{border-color:#8e44ad}
.dashboard-grid,.monitor-grid,.reports-grid,.roles-grid{display:grid;grid-template-columns:2fr 1fr;gap:20px}
.chart-placeholder svg{width:100%;height:auto}.chart-legend{display:flex;flex-wrap:wrap;gap:10px;font-size:13px}
.progress-bar,.zone-bar{background:#ecf0f1;border-radius:4px;height:8px}
.progress-fill,.zone-fill{background:linear-gradient(90deg,#667eea,#764ba2);height:100%;border-radius:4px}
table{width:100%;border-collapse:collapse}th,td{text-align:left;padding:10px;border-bottom:1px solid #ecf0f1}
.status.warning,.badge.high{color:#e67e22}.status.normal,.badge.normal{color:#2980b9}.status.success,.badge.low{color:#27ae60}
.zone-button.active,.report-option.selected{border:2px solid #667eea}
.alert-card{border-left:4px solid #f39c12;background:#fff;border-radius:8px;padding:14px;margin-bottom:12px}
.alert-card.error{border-color:#e74c3c}.alert-card.info{border-color:#3498db}.alert-card.resolved{opacity:.7;border-color:#27ae60}
.success-message{background:#d4edda;color:#155724;padding:12px;border-radius:8px;margin-bottom:16px}
.compliance-item.warning .compliance-icon{color:#e67e22}.status-badge.inactive{color:#95a5a6}
"#;

/// Render a chart as inline SVG followed by its legend.
pub fn chart_block(w: &mut HtmlWriter, chart: &Chart, opts: &RenderOptions) -> Result<()> {
    let svg = chart
        .render_to_svg_string(opts)
        .with_context(|| format!("render chart '{}'", chart.title.as_deref().unwrap_or("untitled")))?;
    w.open("div", "chart-placeholder").raw(&svg);
    w.open("div", "chart-legend");
    for entry in chart.legend_entries("L") {
        w.leaf("span", "legend-item", &entry);
    }
    w.close("div").close("div");
    Ok(())
}

/// Page header plus page content for `route`, without the surrounding shell.
pub fn render_page(route: Route, pages: &Pages, opts: &RenderOptions) -> Result<String> {
    let mut w = HtmlWriter::new();
    w.open("div", "page-container");
    w.open("header", "page-header")
        .leaf("h2", "", route.title())
        .leaf("p", "", route.subtitle())
        .close("header");
    match route {
        Route::Dashboard => pages::dashboard(&mut w, &pages.dashboard, opts)?,
        Route::Usage => pages::usage(&mut w, &pages.usage, opts)?,
        Route::Alerts => pages::alerts(&mut w, &pages.alerts),
        Route::Reports => pages::reports(&mut w, &pages.reports, opts)?,
        Route::Settings => pages::settings(&mut w, &pages.settings),
        Route::Users => pages::users(&mut w, &pages.users),
    }
    w.close("div");
    debug!(route = route.path(), "rendered page");
    Ok(w.finish())
}

fn navbar(w: &mut HtmlWriter) {
    w.open("nav", "navbar").open("div", "navbar-container");
    w.open_with("button", &[("class", "menu-toggle"), ("type", "button")]).text("☰").close("button");
    w.open("div", "navbar-logo")
        .leaf("span", "logo-icon", APP_ICON)
        .leaf("h1", "", APP_TITLE)
        .close("div");
    w.open("div", "navbar-user")
        .leaf("span", "user-icon", "👤")
        .leaf("span", "user-name", CURRENT_USER)
        .close("div");
    w.close("div").close("nav");
}

/// Sidebar links point at the exported file of each page.
fn sidebar(w: &mut HtmlWriter, shell: &ShellState) {
    w.open("aside", shell.sidebar_class()).open("nav", "sidebar-nav");
    for route in NAV_ITEMS {
        let class = if route == shell.route { "nav-link active" } else { "nav-link" };
        w.open_with("a", &[("href", route.file_name()), ("class", class)])
            .leaf("span", "nav-icon", route.icon())
            .leaf("span", "nav-label", route.label())
            .close("a");
    }
    w.close("nav");
    w.open("div", "sidebar-footer").open("div", "footer-item");
    w.leaf("span", "footer-icon", "ℹ️");
    w.open("div", "footer-text")
        .leaf("p", "footer-title", "System Status")
        .leaf("p", "footer-status", SYSTEM_STATUS)
        .close("div");
    w.close("div").close("div").close("aside");
}

/// Self-contained HTML document for the shell's current route.
pub fn render_document(shell: &ShellState, pages: &Pages, opts: &RenderOptions) -> Result<String> {
    let content = render_page(shell.route, pages, opts)?;
    let mut w = HtmlWriter::new();
    w.raw("<!DOCTYPE html>");
    w.open_with("html", &[("lang", "en")]).open("head", "");
    w.void("meta", &[("charset", "utf-8")]);
    w.void("meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")]);
    w.leaf("title", "", &format!("{} | {}", shell.route.title(), APP_TITLE));
    w.open("style", "").raw(STYLE).close("style");
    w.close("head").open("body", "").open("div", "app-container");
    navbar(&mut w);
    w.open("div", "main-content");
    sidebar(&mut w, shell);
    w.open("div", shell.content_class()).raw(&content).close("div");
    w.close("div").close("div").close("body").close("html");
    Ok(w.finish())
}
