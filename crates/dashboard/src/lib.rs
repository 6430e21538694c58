// File: crates/dashboard/src/lib.rs
// Summary: WaterFlow dashboard model; routes, shell and page state, mock data, formatting and HTML rendering.

pub mod config;
pub mod format;
pub mod pages;
pub mod render;
pub mod routes;
pub mod shell;
pub mod store;

pub use config::{ConfigError, DashboardConfig};
pub use pages::Pages;
pub use render::{render_document, render_page};
pub use routes::{Route, NAV_ITEMS};
pub use shell::{ShellAction, ShellState};
pub use store::{Reducer, Store};
