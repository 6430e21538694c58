// File: crates/dashboard/src/shell.rs
// Summary: Application shell state (current route, sidebar visibility) and its reducer.

use tracing::{debug, warn};

use crate::routes::Route;
use crate::store::Reducer;

pub const APP_TITLE: &str = "WaterFlow Management System";
pub const APP_ICON: &str = "💧";
pub const CURRENT_USER: &str = "Admin User";
pub const SYSTEM_STATUS: &str = "Active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub route: Route,
    pub sidebar_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self { route: Route::Dashboard, sidebar_open: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    Navigate(String),
    ToggleSidebar,
}

impl ShellState {
    pub fn new(route: Route, sidebar_open: bool) -> Self {
        Self { route, sidebar_open }
    }

    pub fn sidebar_class(&self) -> &'static str {
        if self.sidebar_open { "sidebar open" } else { "sidebar closed" }
    }

    pub fn content_class(&self) -> &'static str {
        if self.sidebar_open { "content-wrapper sidebar-open" } else { "content-wrapper sidebar-closed" }
    }
}

impl Reducer for ShellState {
    type Action = ShellAction;

    fn reduce(&self, action: ShellAction) -> Self {
        match action {
            ShellAction::Navigate(path) => match Route::from_path(&path) {
                Some(route) => {
                    debug!(from = self.route.path(), to = route.path(), "navigate");
                    Self { route, ..*self }
                }
                None => {
                    warn!(path = %path, "ignoring navigation to unknown path");
                    *self
                }
            },
            ShellAction::ToggleSidebar => Self { sidebar_open: !self.sidebar_open, ..*self },
        }
    }
}
