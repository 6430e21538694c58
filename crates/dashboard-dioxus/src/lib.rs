// File: crates/dashboard-dioxus/src/lib.rs
// Summary: Dioxus desktop UI for the WaterFlow dashboard (desktop only).
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - `view` holds the framework-free chart view model the components draw from.

pub mod view;

pub use view::ChartView;

#[cfg(feature = "desktop")]
pub mod ui;

#[cfg(feature = "desktop")]
pub use ui::run_app;

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_app(_config: waterflow_dashboard::DashboardConfig) -> Result<(), &'static str> {
    Err("waterflow-dioxus built without `desktop` feature; enable features to run the dashboard")
}
