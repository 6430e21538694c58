// File: crates/dashboard-dioxus/src/bin/desktop.rs
// Purpose: Launcher for the WaterFlow desktop dashboard.

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waterflow_dashboard::DashboardConfig;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::var_os("WATERFLOW_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("waterflow.json"));
    let config = DashboardConfig::load_or_default(&path);

    if let Err(e) = waterflow_dioxus::run_app(config) {
        tracing::error!(error = %e, "desktop dashboard failed");
        eprintln!("waterflow-desktop error: {e}");
        std::process::exit(1);
    }
}
