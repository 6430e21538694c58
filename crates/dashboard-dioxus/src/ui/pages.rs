// File: crates/dashboard-dioxus/src/ui/pages.rs
// Summary: One component per page. Interactive controls dispatch actions into the page's store.

use chart_core::RenderOptions;
use dioxus::prelude::*;
use waterflow_dashboard::format::{fixed, number, relative_age};
use waterflow_dashboard::pages::alerts::{Alert, Preference};
use waterflow_dashboard::pages::dashboard::StatCard as CardData;
use waterflow_dashboard::pages::reports::ExportFormat;
use waterflow_dashboard::pages::settings::{
    system_info, Language, SettingsField, ThemeMode, Timezone, Toggle, NOTICE_DURATION, SAVED_NOTICE,
};
use waterflow_dashboard::pages::usage::TimeRange;
use waterflow_dashboard::pages::users::{DraftField, Role, User, ACTIVITY_LOG};
use waterflow_dashboard::pages::{
    AlertsAction, AlertsState, DashboardState, ReportsAction, ReportsState, SettingsAction, SettingsState,
    UsageAction, UsageState, UsersAction, UsersState,
};
use waterflow_dashboard::Store;

use super::chart::SvgChart;

fn width_style(percent: f64) -> String {
    format!("width: {}%", fixed(percent.clamp(0.0, 100.0), 0))
}

#[component]
fn StatCard(card: CardData) -> Element {
    rsx! {
        div { class: "stat-card {card.color.class()}",
            div { class: "stat-icon", "{card.icon}" }
            div { class: "stat-content",
                h4 { "{card.title}" }
                div { class: "stat-value-group",
                    span { class: "stat-main-value", "{card.value}" }
                    span { class: "stat-trend", "{card.trend}" }
                }
            }
        }
    }
}

#[component]
pub fn DashboardPage(state: Signal<DashboardState>, opts: RenderOptions) -> Element {
    let s = state.read();
    let cards = s.stat_cards();
    let chart = s.trend_chart();
    let locations: Vec<(String, String, String)> = s
        .locations
        .iter()
        .map(|l| (l.name.clone(), format!("{}L", number(l.usage)), width_style(s.location_fill(l))))
        .collect();
    let activity = s.activity.clone();

    rsx! {
        div { class: "stats-grid",
            for card in cards {
                StatCard { card }
            }
        }
        div { class: "dashboard-grid",
            div { class: "card",
                h3 { "Usage Trend (7 Days)" }
                SvgChart { chart, opts }
            }
            div { class: "card",
                h3 { "Top Locations" }
                div { class: "locations-list",
                    for (name, usage, fill) in locations {
                        div { class: "location-item",
                            div { class: "location-info",
                                span { class: "location-name", "{name}" }
                                span { class: "location-usage", "{usage}" }
                            }
                            div { class: "progress-bar",
                                div { class: "progress-fill", style: "{fill}" }
                            }
                        }
                    }
                }
            }
        }
        div { class: "card",
            h3 { "Recent Activity" }
            table { class: "activity-table",
                thead {
                    tr {
                        th { "Time" }
                        th { "Location" }
                        th { "Event" }
                        th { "Usage (L)" }
                        th { "Status" }
                    }
                }
                tbody {
                    for row in activity {
                        tr {
                            td { "{row.time}" }
                            td { "{row.location}" }
                            td { "{row.event}" }
                            td { "{row.usage}" }
                            td { span { class: row.status.class(), "{row.status.label()}" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UsagePage(mut store: Signal<Store<UsageState>>, opts: RenderOptions) -> Element {
    let s = store.read().state().clone();
    let zone_name = s.selected().map(|z| z.name).unwrap_or("");
    let stats = s.stats().rows();
    let breakdown = s.breakdown();

    rsx! {
        div { class: "controls",
            div { class: "control-group",
                label { "Time Range:" }
                select {
                    name: "time-range",
                    onchange: move |e: Event<FormData>| {
                        if let Some(range) = TimeRange::from_value(&e.value()) {
                            store.write().dispatch(UsageAction::SetTimeRange(range));
                        }
                    },
                    for r in TimeRange::ALL {
                        option { value: r.value(), selected: r == s.time_range, "{r.label()}" }
                    }
                }
            }
        }
        div { class: "monitor-grid",
            div { class: "card",
                h3 { "Usage by Zone" }
                div { class: "zone-buttons",
                    for zone in s.zones.iter().cloned() {
                        button {
                            key: "{zone.id}",
                            class: if zone.id == s.selected_zone { "zone-button active" } else { "zone-button" },
                            onclick: move |_| store.write().dispatch(UsageAction::SelectZone(zone.id.to_string())),
                            span { class: "zone-label", "{zone.name}" }
                            span { class: "zone-usage", "{zone.usage_label()}" }
                        }
                    }
                }
            }
        }
        div { class: "monitor-grid",
            div { class: "card",
                h3 { "Current Zone Usage: {zone_name}" }
                SvgChart { chart: s.hourly_chart(), opts }
            }
            div { class: "card",
                h3 { "Usage Statistics" }
                div { class: "statistics",
                    for (label, value) in stats {
                        div { class: "stat-row",
                            span { class: "stat-label", "{label}" }
                            span { class: "stat-value", "{value}" }
                        }
                    }
                }
            }
        }
        div { class: "card",
            h3 { "Hourly Breakdown" }
            table { class: "usage-table",
                thead {
                    tr {
                        th { "Hour" }
                        th { "Usage (L)" }
                        th { "% of Daily Total" }
                        th { "Status" }
                    }
                }
                tbody {
                    for row in breakdown {
                        tr {
                            td { "{row.time}" }
                            td { "{number(row.usage)}" }
                            td { "{row.share}%" }
                            td { span { class: row.level.class(), "{row.level.label()}" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AlertCard(alert: Alert, mut store: Signal<Store<AlertsState>>) -> Element {
    let id = alert.id;
    let (class, icon) = if alert.resolved {
        ("alert-card resolved".to_string(), "✓")
    } else {
        (format!("alert-card {}", alert.kind.class()), alert.kind.icon())
    };
    rsx! {
        div { class: "{class}",
            div { class: "alert-header",
                span { class: "alert-icon", "{icon}" }
                div { class: "alert-title-group",
                    h4 { "{alert.title}" }
                    p { class: "alert-meta", "{alert.meta()}" }
                }
            }
            p { class: "alert-message", "{alert.message}" }
            if !alert.resolved {
                div { class: "alert-actions",
                    button { class: "btn-resolve", onclick: move |_| store.write().dispatch(AlertsAction::Resolve(id)), "✓ Mark Resolved" }
                    button { class: "btn-dismiss", onclick: move |_| store.write().dispatch(AlertsAction::Dismiss(id)), "Dismiss" }
                }
            }
        }
    }
}

#[component]
pub fn AlertsPage(mut store: Signal<Store<AlertsState>>) -> Element {
    let s = store.read().state().clone();
    let active: Vec<Alert> = s.active().into_iter().cloned().collect();
    let resolved: Vec<Alert> = s.resolved().into_iter().cloned().collect();
    let prefs = s.preferences;

    rsx! {
        if active.is_empty() {
            div { class: "no-alerts",
                span { class: "no-alerts-icon", "✓" }
                h3 { "No Active Alerts" }
                p { "Your system is running smoothly!" }
            }
        } else {
            div { class: "alerts-section",
                h3 { "Active Alerts ({active.len()})" }
                div { class: "alerts-list",
                    for alert in active.iter().cloned() {
                        AlertCard { key: "{alert.id}", alert, store }
                    }
                }
            }
        }
        if !resolved.is_empty() {
            div { class: "alerts-section resolved-section",
                h3 { "Resolved Alerts ({resolved.len()})" }
                div { class: "alerts-list",
                    for alert in resolved.iter().cloned() {
                        AlertCard { key: "{alert.id}", alert, store }
                    }
                }
            }
        }
        div { class: "card alert-settings",
            h3 { "Alert Settings" }
            div { class: "settings-grid",
                for pref in Preference::ALL {
                    label { class: "setting-item",
                        input {
                            r#type: "checkbox",
                            checked: prefs.enabled(pref),
                            onchange: move |_| store.write().dispatch(AlertsAction::TogglePreference(pref)),
                        }
                        span { "{pref.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ReportsPage(mut store: Signal<Store<ReportsState>>, opts: RenderOptions) -> Element {
    let s = store.read().state().clone();
    let quick = s.quick_stats().rows();
    let recent: Vec<(String, String, String, String)> = s
        .recent
        .iter()
        .map(|r| (r.name.to_string(), relative_age(r.generated), r.period.label(), format!("{} MB", number(r.size_mb))))
        .collect();

    rsx! {
        div { class: "reports-grid",
            div { class: "card",
                h3 { "Generate Report" }
                div { class: "report-options",
                    for t in s.templates.iter().cloned() {
                        div {
                            key: "{t.id}",
                            class: if t.id == s.selected { "report-option selected" } else { "report-option" },
                            onclick: move |_| store.write().dispatch(ReportsAction::SelectReport(t.id.to_string())),
                            h4 { "{t.title}" }
                            p { "{t.description}" }
                            span { class: "report-meta", "{t.meta()}" }
                        }
                    }
                }
                div { class: "export-controls",
                    select {
                        name: "export-format",
                        onchange: move |e: Event<FormData>| {
                            if let Some(format) = ExportFormat::from_value(&e.value()) {
                                store.write().dispatch(ReportsAction::SetExportFormat(format));
                            }
                        },
                        for f in ExportFormat::ALL {
                            option { value: f.value(), selected: f == s.export_format, "{f.label()}" }
                        }
                    }
                    button { class: "btn-export", "📥 Export Report" }
                }
            }
            div { class: "card",
                h3 { "Quick Stats" }
                div { class: "stats-list",
                    for (label, value) in quick {
                        div { class: "stat-item",
                            span { class: "stat-label", "{label}" }
                            span { class: "stat-number", "{value}" }
                        }
                    }
                }
            }
        }
        div { class: "card",
            h3 { "Usage Trends (Last 6 Months)" }
            SvgChart { chart: s.trend_chart(), opts }
        }
        div { class: "reports-grid",
            div { class: "card",
                h3 { "Consumption by Zone" }
                div { class: "zone-breakdown",
                    for zone in s.zones.iter() {
                        div { class: "zone-item",
                            div { class: "zone-info",
                                span { class: "zone-name", "{zone.name}" }
                                span { class: "zone-percentage", "{number(zone.percent)}%" }
                            }
                            div { class: "zone-bar",
                                div { class: "zone-fill", style: "{width_style(zone.percent)}" }
                            }
                        }
                    }
                }
            }
            div { class: "card",
                h3 { "Compliance Status" }
                div { class: "compliance-items",
                    for item in s.compliance.iter() {
                        div { class: item.status.class(),
                            span { class: "compliance-icon", "{item.status.icon()}" }
                            div { class: "compliance-info",
                                h4 { "{item.title}" }
                                p { "{item.detail}" }
                            }
                        }
                    }
                }
            }
        }
        div { class: "card",
            h3 { "Recent Reports" }
            table { class: "reports-table",
                thead {
                    tr {
                        th { "Report Name" }
                        th { "Generated" }
                        th { "Period" }
                        th { "Size" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for (name, generated, period, size) in recent {
                        tr {
                            td { "{name}" }
                            td { "{generated}" }
                            td { "{period}" }
                            td { "{size}" }
                            td { button { class: "link-button", "Download" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SettingsPage(mut store: Signal<Store<SettingsState>>) -> Element {
    let state = store.read().state().clone();
    let d = state.draft.clone();
    let mut edit = move |field: SettingsField| store.write().dispatch(SettingsAction::Edit(field));

    rsx! {
        if state.notice {
            div { class: "success-message", "{SAVED_NOTICE}" }
        }
        div { class: "settings-container",
            div { class: "settings-card",
                h3 { "Organization Settings" }
                div { class: "form-group",
                    label { "Organization Name" }
                    input { r#type: "text", value: "{d.organization}", oninput: move |e| edit(SettingsField::Organization(e.value())) }
                }
                div { class: "form-group",
                    label { "Email Address" }
                    input { r#type: "email", value: "{d.email}", oninput: move |e| edit(SettingsField::Email(e.value())) }
                }
                div { class: "form-group",
                    label { "Phone Number" }
                    input { r#type: "tel", value: "{d.phone}", oninput: move |e| edit(SettingsField::Phone(e.value())) }
                }
            }
            div { class: "settings-card",
                h3 { "Regional Settings" }
                div { class: "form-group",
                    label { "Timezone" }
                    select {
                        onchange: move |e: Event<FormData>| {
                            if let Some(tz) = Timezone::from_label(&e.value()) {
                                edit(SettingsField::Timezone(tz));
                            }
                        },
                        for tz in Timezone::ALL {
                            option { value: tz.label(), selected: tz == d.timezone, "{tz.label()}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Language" }
                    select {
                        onchange: move |e: Event<FormData>| {
                            if let Some(lang) = Language::from_label(&e.value()) {
                                edit(SettingsField::Language(lang));
                            }
                        },
                        for lang in Language::ALL {
                            option { value: lang.label(), selected: lang == d.language, "{lang.label()}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "Theme" }
                    select {
                        onchange: move |e: Event<FormData>| {
                            if let Some(mode) = ThemeMode::from_value(&e.value()) {
                                edit(SettingsField::Theme(mode));
                            }
                        },
                        for mode in ThemeMode::ALL {
                            option { value: mode.value(), selected: mode == d.theme, "{mode.label()}" }
                        }
                    }
                }
            }
            div { class: "settings-card",
                h3 { "Notification Settings" }
                for toggle in Toggle::ALL {
                    label { class: "checkbox-item",
                        input {
                            r#type: "checkbox",
                            checked: d.toggle(toggle),
                            onchange: move |_| {
                                let on = !store.read().state().draft.toggle(toggle);
                                edit(SettingsField::Toggle(toggle, on));
                            },
                        }
                        span { "{toggle.label()}" }
                    }
                }
            }
            div { class: "settings-card",
                h3 { "System Information" }
                for (label, value) in system_info() {
                    div { class: "info-item",
                        span { class: "info-label", "{label}" }
                        span { class: "info-value", "{value}" }
                    }
                }
            }
            div { class: "settings-card",
                h3 { "Data Management" }
                button { class: "btn-secondary", "📊 Export Data" }
                button { class: "btn-secondary", "🔄 Backup Now" }
                button { class: "btn-danger", "🗑️ Clear Cache" }
            }
            div { class: "settings-actions",
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        store.write().dispatch(SettingsAction::Save);
                        let tag = store.read().state().notice_tag();
                        if let Some(tag) = tag {
                            spawn(async move {
                                tokio::time::sleep(NOTICE_DURATION).await;
                                store.write().dispatch(SettingsAction::DismissNotice(tag));
                            });
                        }
                    },
                    "✓ Save Settings"
                }
                button { class: "btn-secondary", onclick: move |_| store.write().dispatch(SettingsAction::Cancel), "Cancel" }
            }
        }
    }
}

#[component]
fn UserRow(user: User, mut store: Signal<Store<UsersState>>) -> Element {
    let id = user.id;
    rsx! {
        tr {
            td {
                div { class: "user-cell",
                    span { class: "user-avatar", "{user.initial()}" }
                    span { "{user.name}" }
                }
            }
            td { "{user.email}" }
            td { span { class: "role-badge", "{user.role.label()}" } }
            td { span { class: user.status.class(), "{user.status.label()}" } }
            td { "{user.last_login_label()}" }
            td {
                div { class: "action-buttons",
                    button { class: "btn-edit", "✏️" }
                    button { class: "btn-delete", onclick: move |_| store.write().dispatch(UsersAction::Delete(id)), "🗑️" }
                }
            }
        }
    }
}

#[component]
pub fn UsersPage(mut store: Signal<Store<UsersState>>) -> Element {
    let s = store.read().state().clone();
    let draft = s.draft.clone();
    let mut edit = move |field: DraftField| store.write().dispatch(UsersAction::EditDraft(field));

    rsx! {
        div { class: "users-header",
            button { class: "btn-add-user", onclick: move |_| store.write().dispatch(UsersAction::ToggleForm), "+ Add New User" }
        }
        if s.form_open {
            div { class: "card add-user-form",
                h3 { "Add New User" }
                div { class: "form-grid",
                    div { class: "form-group",
                        label { "Full Name" }
                        input { r#type: "text", value: "{draft.name}", oninput: move |e| edit(DraftField::Name(e.value())) }
                    }
                    div { class: "form-group",
                        label { "Email Address" }
                        input { r#type: "email", value: "{draft.email}", oninput: move |e| edit(DraftField::Email(e.value())) }
                    }
                    div { class: "form-group",
                        label { "Role" }
                        select {
                            onchange: move |e: Event<FormData>| {
                                if let Some(role) = Role::from_label(&e.value()) {
                                    edit(DraftField::Role(role));
                                }
                            },
                            for role in Role::ALL {
                                option { value: role.label(), selected: role == draft.role, "{role.label()}" }
                            }
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "btn-primary", onclick: move |_| store.write().dispatch(UsersAction::Add), "Add User" }
                    button { class: "btn-secondary", onclick: move |_| store.write().dispatch(UsersAction::CancelForm), "Cancel" }
                }
            }
        }
        div { class: "card",
            h3 { "Active Users" }
            table { class: "users-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        th { "Last Login" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in s.users.iter().cloned() {
                        UserRow { key: "{user.id}", user, store }
                    }
                }
            }
        }
        div { class: "roles-grid",
            div { class: "card",
                h3 { "Role Permissions" }
                div { class: "permissions-list",
                    for role in Role::ALL {
                        div { class: "permission-group",
                            h4 { "{role.label()}" }
                            ul {
                                for (granted, perm) in role.permissions().iter().copied() {
                                    li { if granted { "✓ {perm}" } else { "✗ {perm}" } }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "card",
                h3 { "Activity Log" }
                div { class: "activity-log",
                    for (time, actor, detail) in ACTIVITY_LOG {
                        div { class: "log-entry",
                            span { class: "log-time", "{time}" }
                            span { class: "log-action", "{actor}" }
                            span { class: "log-detail", "{detail}" }
                        }
                    }
                }
            }
        }
    }
}
