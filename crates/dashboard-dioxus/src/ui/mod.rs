// File: crates/dashboard-dioxus/src/ui/mod.rs
// Summary: App shell (navbar, sidebar, page header), page routing and the desktop launcher.

mod chart;
mod pages;

pub use chart::SvgChart;

use dioxus::prelude::*;
use tracing::info;
use waterflow_dashboard::pages::DashboardState;
use waterflow_dashboard::pages::{AlertsState, ReportsState, SettingsState, UsageState, UsersState};
use waterflow_dashboard::render::STYLE;
use waterflow_dashboard::shell::{APP_ICON, APP_TITLE, CURRENT_USER, SYSTEM_STATUS};
use waterflow_dashboard::{DashboardConfig, Route, ShellAction, ShellState, Store, NAV_ITEMS};

#[component]
fn Navbar(on_toggle: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-container",
                button { class: "menu-toggle", onclick: move |_| on_toggle.call(()), "☰" }
                div { class: "navbar-logo",
                    span { class: "logo-icon", "{APP_ICON}" }
                    h1 { "{APP_TITLE}" }
                }
                div { class: "navbar-user",
                    span { class: "user-icon", "👤" }
                    span { class: "user-name", "{CURRENT_USER}" }
                }
            }
        }
    }
}

#[component]
fn Sidebar(mut shell: Signal<Store<ShellState>>) -> Element {
    let state = *shell.read().state();
    rsx! {
        aside { class: state.sidebar_class(),
            nav { class: "sidebar-nav",
                for route in NAV_ITEMS {
                    a {
                        key: "{route.path()}",
                        class: if route == state.route { "nav-link active" } else { "nav-link" },
                        onclick: move |_| shell.write().dispatch(ShellAction::Navigate(route.path().to_string())),
                        span { class: "nav-icon", "{route.icon()}" }
                        span { class: "nav-label", "{route.label()}" }
                    }
                }
            }
            div { class: "sidebar-footer",
                div { class: "footer-item",
                    span { class: "footer-icon", "ℹ️" }
                    div { class: "footer-text",
                        p { class: "footer-title", "System Status" }
                        p { class: "footer-status", "{SYSTEM_STATUS}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PageHeader(route: Route) -> Element {
    rsx! {
        header { class: "page-header",
            h2 { "{route.title()}" }
            p { "{route.subtitle()}" }
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<DashboardConfig>();
    let opts = config.render_options();

    let mut shell = use_signal(|| Store::new(config.shell()));
    let dashboard = use_signal(DashboardState::seed);
    let usage = use_signal(|| Store::new(UsageState::seed()));
    let alerts = use_signal(|| Store::new(AlertsState::seed()));
    let reports = use_signal(|| Store::new(ReportsState::seed()));
    let settings = use_signal(|| Store::new(SettingsState::seed()));
    let users = use_signal(|| Store::new(UsersState::seed()));

    let state = *shell.read().state();
    let page = match state.route {
        Route::Dashboard => rsx! { pages::DashboardPage { state: dashboard, opts } },
        Route::Usage => rsx! { pages::UsagePage { store: usage, opts } },
        Route::Alerts => rsx! { pages::AlertsPage { store: alerts } },
        Route::Reports => rsx! { pages::ReportsPage { store: reports, opts } },
        Route::Settings => rsx! { pages::SettingsPage { store: settings } },
        Route::Users => rsx! { pages::UsersPage { store: users } },
    };

    rsx! {
        div { class: "app-container",
            Navbar { on_toggle: move |_| shell.write().dispatch(ShellAction::ToggleSidebar) }
            div { class: "main-content",
                Sidebar { shell }
                div { class: state.content_class(),
                    div { class: "page-container",
                        PageHeader { route: state.route }
                        {page}
                    }
                }
            }
        }
    }
}

/// Open the dashboard in a desktop window. Blocks until the window closes.
pub fn run_app(config: DashboardConfig) -> Result<(), String> {
    use dioxus_desktop::tao::window::WindowBuilder;

    info!(route = config.initial_route.path(), theme = %config.theme, "launching desktop dashboard");

    // Dioxus 0.6 launch with explicit providers vec
    let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = vec![Box::new(move || {
        Box::new(config.clone()) as Box<dyn std::any::Any>
    })];
    let cfg = dioxus_desktop::Config::new()
        .with_window(WindowBuilder::new().with_title(APP_TITLE))
        .with_custom_head(format!("<style>{STYLE}</style>"));
    let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
    dioxus_desktop::launch::launch(App, providers, globals);
    Ok(())
}
