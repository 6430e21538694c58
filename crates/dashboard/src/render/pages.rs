// File: crates/dashboard/src/render/pages.rs
// Summary: Page bodies. Buttons that have no behavior in a static document are rendered inert.

use anyhow::Result;
use chart_core::RenderOptions;

use super::chart_block;
use super::html::HtmlWriter;
use crate::format::{fixed, number, relative_age};
use crate::pages::alerts::{Alert, Preference};
use crate::pages::reports::ExportFormat;
use crate::pages::settings::{system_info, Language, ThemeMode, Timezone, Toggle, SAVED_NOTICE};
use crate::pages::usage::TimeRange;
use crate::pages::users::{Role, ACTIVITY_LOG};
use crate::pages::{AlertsState, DashboardState, ReportsState, SettingsState, UsageState, UsersState};

fn button(w: &mut HtmlWriter, class: &str, label: &str) {
    w.open_with("button", &[("class", class), ("type", "button")]).text(label).close("button");
}

fn width_style(percent: f64) -> String {
    format!("width: {}%", fixed(percent.clamp(0.0, 100.0), 0))
}

fn select<'a>(w: &mut HtmlWriter, name: &str, options: impl IntoIterator<Item = (&'a str, &'a str, bool)>) {
    w.open_with("select", &[("name", name)]);
    for (value, label, selected) in options {
        if selected {
            w.open_with("option", &[("value", value), ("selected", "selected")]);
        } else {
            w.open_with("option", &[("value", value)]);
        }
        w.text(label).close("option");
    }
    w.close("select");
}

fn checkbox(w: &mut HtmlWriter, class: &str, label: &str, checked: bool) {
    w.open("label", class);
    if checked {
        w.void("input", &[("type", "checkbox"), ("checked", "checked")]);
    } else {
        w.void("input", &[("type", "checkbox")]);
    }
    w.leaf("span", "", label).close("label");
}

fn table_head(w: &mut HtmlWriter, class: &str, headers: &[&str]) {
    w.open("table", class).open("thead", "").open("tr", "");
    for h in headers {
        w.leaf("th", "", h);
    }
    w.close("tr").close("thead").open("tbody", "");
}

fn stat_rows(w: &mut HtmlWriter, list_class: &str, row_class: &str, value_class: &str, rows: &[(&str, String)]) {
    w.open("div", list_class);
    for (label, value) in rows {
        w.open("div", row_class).leaf("span", "stat-label", label).leaf("span", value_class, value).close("div");
    }
    w.close("div");
}

pub(super) fn dashboard(w: &mut HtmlWriter, state: &DashboardState, opts: &RenderOptions) -> Result<()> {
    w.open("div", "stats-grid");
    for card in state.stat_cards() {
        w.open("div", &format!("stat-card {}", card.color.class()));
        w.leaf("div", "stat-icon", card.icon);
        w.open("div", "stat-content").leaf("h4", "", card.title);
        w.open("div", "stat-value-group")
            .leaf("span", "stat-main-value", &card.value)
            .leaf("span", "stat-trend", card.trend)
            .close("div");
        w.close("div").close("div");
    }
    w.close("div");

    w.open("div", "dashboard-grid");
    w.open("div", "card").leaf("h3", "", "Usage Trend (7 Days)");
    chart_block(w, &state.trend_chart(), opts)?;
    w.close("div");

    w.open("div", "card").leaf("h3", "", "Top Locations").open("div", "locations-list");
    for loc in &state.locations {
        w.open("div", "location-item");
        w.open("div", "location-info")
            .leaf("span", "location-name", &loc.name)
            .leaf("span", "location-usage", &format!("{}L", number(loc.usage)))
            .close("div");
        w.open("div", "progress-bar")
            .open_with("div", &[("class", "progress-fill"), ("style", width_style(state.location_fill(loc)).as_str())])
            .close("div")
            .close("div");
        w.close("div");
    }
    w.close("div").close("div");
    w.close("div");

    w.open("div", "card").leaf("h3", "", "Recent Activity");
    table_head(w, "activity-table", &["Time", "Location", "Event", "Usage (L)", "Status"]);
    for row in &state.activity {
        w.open("tr", "")
            .leaf("td", "", row.time)
            .leaf("td", "", row.location)
            .leaf("td", "", row.event)
            .leaf("td", "", &row.usage.to_string());
        w.open("td", "").leaf("span", row.status.class(), row.status.label()).close("td");
        w.close("tr");
    }
    w.close("tbody").close("table").close("div");
    Ok(())
}

pub(super) fn usage(w: &mut HtmlWriter, state: &UsageState, opts: &RenderOptions) -> Result<()> {
    w.open("div", "controls").open("div", "control-group").leaf("label", "", "Time Range:");
    select(
        w,
        "time-range",
        TimeRange::ALL.into_iter().map(|r| (r.value(), r.label(), r == state.time_range)),
    );
    w.close("div").close("div");

    w.open("div", "monitor-grid").open("div", "card").leaf("h3", "", "Usage by Zone");
    w.open("div", "zone-buttons");
    for zone in &state.zones {
        let class = if zone.id == state.selected_zone { "zone-button active" } else { "zone-button" };
        w.open_with("button", &[("class", class), ("type", "button"), ("data-zone", zone.id)])
            .leaf("span", "zone-label", zone.name)
            .leaf("span", "zone-usage", &zone.usage_label())
            .close("button");
    }
    w.close("div").close("div").close("div");

    w.open("div", "monitor-grid");
    let zone_name = state.selected().map(|z| z.name).unwrap_or("");
    w.open("div", "card").leaf("h3", "", &format!("Current Zone Usage: {zone_name}"));
    chart_block(w, &state.hourly_chart(), opts)?;
    w.close("div");
    w.open("div", "card").leaf("h3", "", "Usage Statistics");
    stat_rows(w, "statistics", "stat-row", "stat-value", &state.stats().rows());
    w.close("div");
    w.close("div");

    w.open("div", "card").leaf("h3", "", "Hourly Breakdown");
    table_head(w, "usage-table", &["Hour", "Usage (L)", "% of Daily Total", "Status"]);
    for row in state.breakdown() {
        w.open("tr", "")
            .leaf("td", "", &row.time)
            .leaf("td", "", &number(row.usage))
            .leaf("td", "", &format!("{}%", row.share));
        w.open("td", "").leaf("span", row.level.class(), row.level.label()).close("td");
        w.close("tr");
    }
    w.close("tbody").close("table").close("div");
    Ok(())
}

fn alert_card(w: &mut HtmlWriter, alert: &Alert) {
    let (class, icon) = if alert.resolved {
        ("alert-card resolved".to_string(), "✓")
    } else {
        (format!("alert-card {}", alert.kind.class()), alert.kind.icon())
    };
    w.open_with("div", &[("class", class.as_str()), ("data-alert", alert.id.to_string().as_str())]);
    w.open("div", "alert-header").leaf("span", "alert-icon", icon);
    w.open("div", "alert-title-group")
        .leaf("h4", "", &alert.title)
        .leaf("p", "alert-meta", &alert.meta())
        .close("div");
    w.close("div");
    w.leaf("p", "alert-message", &alert.message);
    if !alert.resolved {
        w.open("div", "alert-actions");
        button(w, "btn-resolve", "✓ Mark Resolved");
        button(w, "btn-dismiss", "Dismiss");
        w.close("div");
    }
    w.close("div");
}

pub(super) fn alerts(w: &mut HtmlWriter, state: &AlertsState) {
    let active = state.active();
    let resolved = state.resolved();

    if active.is_empty() {
        w.open("div", "no-alerts")
            .leaf("span", "no-alerts-icon", "✓")
            .leaf("h3", "", "No Active Alerts")
            .leaf("p", "", "Your system is running smoothly!")
            .close("div");
    } else {
        w.open("div", "alerts-section").leaf("h3", "", &format!("Active Alerts ({})", active.len()));
        w.open("div", "alerts-list");
        for alert in &active {
            alert_card(w, alert);
        }
        w.close("div").close("div");
    }

    if !resolved.is_empty() {
        w.open("div", "alerts-section resolved-section")
            .leaf("h3", "", &format!("Resolved Alerts ({})", resolved.len()));
        w.open("div", "alerts-list");
        for alert in &resolved {
            alert_card(w, alert);
        }
        w.close("div").close("div");
    }

    w.open("div", "card alert-settings").leaf("h3", "", "Alert Settings").open("div", "settings-grid");
    for pref in Preference::ALL {
        checkbox(w, "setting-item", pref.label(), state.preferences.enabled(pref));
    }
    w.close("div").close("div");
}

pub(super) fn reports(w: &mut HtmlWriter, state: &ReportsState, opts: &RenderOptions) -> Result<()> {
    w.open("div", "reports-grid");
    w.open("div", "card").leaf("h3", "", "Generate Report").open("div", "report-options");
    for t in &state.templates {
        let class = if t.id == state.selected { "report-option selected" } else { "report-option" };
        w.open_with("div", &[("class", class), ("data-report", t.id)])
            .leaf("h4", "", t.title)
            .leaf("p", "", t.description)
            .leaf("span", "report-meta", &t.meta())
            .close("div");
    }
    w.close("div");
    w.open("div", "export-controls");
    select(
        w,
        "export-format",
        ExportFormat::ALL.into_iter().map(|f| (f.value(), f.label(), f == state.export_format)),
    );
    button(w, "btn-export", "📥 Export Report");
    w.close("div").close("div");

    w.open("div", "card").leaf("h3", "", "Quick Stats");
    stat_rows(w, "stats-list", "stat-item", "stat-number", &state.quick_stats().rows());
    w.close("div");
    w.close("div");

    w.open("div", "card").leaf("h3", "", "Usage Trends (Last 6 Months)");
    chart_block(w, &state.trend_chart(), opts)?;
    w.close("div");

    w.open("div", "reports-grid");
    w.open("div", "card").leaf("h3", "", "Consumption by Zone").open("div", "zone-breakdown");
    for zone in &state.zones {
        w.open("div", "zone-item");
        w.open("div", "zone-info")
            .leaf("span", "zone-name", zone.name)
            .leaf("span", "zone-percentage", &format!("{}%", number(zone.percent)))
            .close("div");
        w.open("div", "zone-bar")
            .open_with("div", &[("class", "zone-fill"), ("style", width_style(zone.percent).as_str())])
            .close("div")
            .close("div");
        w.close("div");
    }
    w.close("div").close("div");

    w.open("div", "card").leaf("h3", "", "Compliance Status").open("div", "compliance-items");
    for item in &state.compliance {
        w.open("div", item.status.class()).leaf("span", "compliance-icon", item.status.icon());
        w.open("div", "compliance-info").leaf("h4", "", item.title).leaf("p", "", item.detail).close("div");
        w.close("div");
    }
    w.close("div").close("div");
    w.close("div");

    w.open("div", "card").leaf("h3", "", "Recent Reports");
    table_head(w, "reports-table", &["Report Name", "Generated", "Period", "Size", "Actions"]);
    for r in &state.recent {
        w.open("tr", "")
            .leaf("td", "", r.name)
            .leaf("td", "", &relative_age(r.generated))
            .leaf("td", "", &r.period.label())
            .leaf("td", "", &format!("{} MB", number(r.size_mb)));
        w.open("td", "");
        button(w, "link-button", "Download");
        w.close("td").close("tr");
    }
    w.close("tbody").close("table").close("div");
    Ok(())
}

fn text_input(w: &mut HtmlWriter, label: &str, kind: &str, name: &str, value: &str) {
    w.open("div", "form-group").leaf("label", "", label);
    w.void("input", &[("type", kind), ("name", name), ("value", value)]);
    w.close("div");
}

pub(super) fn settings(w: &mut HtmlWriter, state: &SettingsState) {
    let s = &state.draft;
    if state.notice {
        w.leaf("div", "success-message", SAVED_NOTICE);
    }
    w.open("div", "settings-container");

    w.open("div", "settings-card").leaf("h3", "", "Organization Settings");
    text_input(w, "Organization Name", "text", "organization", &s.organization);
    text_input(w, "Email Address", "email", "email", &s.email);
    text_input(w, "Phone Number", "tel", "phone", &s.phone);
    w.close("div");

    w.open("div", "settings-card").leaf("h3", "", "Regional Settings");
    w.open("div", "form-group").leaf("label", "", "Timezone");
    select(w, "timezone", Timezone::ALL.into_iter().map(|t| (t.label(), t.label(), t == s.timezone)));
    w.close("div");
    w.open("div", "form-group").leaf("label", "", "Language");
    select(w, "language", Language::ALL.into_iter().map(|l| (l.label(), l.label(), l == s.language)));
    w.close("div");
    w.open("div", "form-group").leaf("label", "", "Theme");
    select(w, "theme", ThemeMode::ALL.into_iter().map(|m| (m.value(), m.label(), m == s.theme)));
    w.close("div");
    w.close("div");

    w.open("div", "settings-card").leaf("h3", "", "Notification Settings");
    for toggle in Toggle::ALL {
        checkbox(w, "checkbox-item", toggle.label(), s.toggle(toggle));
    }
    w.close("div");

    w.open("div", "settings-card").leaf("h3", "", "System Information");
    for (label, value) in system_info() {
        w.open("div", "info-item")
            .leaf("span", "info-label", label)
            .leaf("span", "info-value", &value)
            .close("div");
    }
    w.close("div");

    w.open("div", "settings-card").leaf("h3", "", "Data Management");
    button(w, "btn-secondary", "📊 Export Data");
    button(w, "btn-secondary", "🔄 Backup Now");
    button(w, "btn-danger", "🗑️ Clear Cache");
    w.close("div");

    w.open("div", "settings-actions");
    button(w, "btn-primary", "✓ Save Settings");
    button(w, "btn-secondary", "Cancel");
    w.close("div");

    w.close("div");
}

pub(super) fn users(w: &mut HtmlWriter, state: &UsersState) {
    w.open("div", "users-header");
    button(w, "btn-add-user", "+ Add New User");
    w.close("div");

    if state.form_open {
        w.open("div", "card add-user-form").leaf("h3", "", "Add New User").open("div", "form-grid");
        text_input(w, "Full Name", "text", "name", &state.draft.name);
        text_input(w, "Email Address", "email", "email", &state.draft.email);
        w.open("div", "form-group").leaf("label", "", "Role");
        select(w, "role", Role::ALL.into_iter().map(|r| (r.label(), r.label(), r == state.draft.role)));
        w.close("div");
        w.close("div");
        w.open("div", "form-actions");
        button(w, "btn-primary", "Add User");
        button(w, "btn-secondary", "Cancel");
        w.close("div").close("div");
    }

    w.open("div", "card").leaf("h3", "", "Active Users");
    table_head(w, "users-table", &["Name", "Email", "Role", "Status", "Last Login", "Actions"]);
    for u in &state.users {
        w.open_with("tr", &[("data-user", u.id.to_string().as_str())]);
        w.open("td", "").open("div", "user-cell");
        w.leaf("span", "user-avatar", &u.initial()).leaf("span", "", &u.name);
        w.close("div").close("td");
        w.leaf("td", "", &u.email);
        w.open("td", "").leaf("span", "role-badge", u.role.label()).close("td");
        w.open("td", "").leaf("span", u.status.class(), u.status.label()).close("td");
        w.leaf("td", "", &u.last_login_label());
        w.open("td", "").open("div", "action-buttons");
        button(w, "btn-edit", "✏️");
        button(w, "btn-delete", "🗑️");
        w.close("div").close("td").close("tr");
    }
    w.close("tbody").close("table").close("div");

    w.open("div", "roles-grid");
    w.open("div", "card").leaf("h3", "", "Role Permissions").open("div", "permissions-list");
    for role in Role::ALL {
        w.open("div", "permission-group").leaf("h4", "", role.label()).open("ul", "");
        for (granted, perm) in role.permissions() {
            let mark = if *granted { "✓" } else { "✗" };
            w.leaf("li", "", &format!("{mark} {perm}"));
        }
        w.close("ul").close("div");
    }
    w.close("div").close("div");

    w.open("div", "card").leaf("h3", "", "Activity Log").open("div", "activity-log");
    for (time, actor, detail) in ACTIVITY_LOG {
        w.open("div", "log-entry")
            .leaf("span", "log-time", time)
            .leaf("span", "log-action", actor)
            .leaf("span", "log-detail", detail)
            .close("div");
    }
    w.close("div").close("div");
    w.close("div");
}
