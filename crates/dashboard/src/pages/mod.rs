// File: crates/dashboard/src/pages/mod.rs
// Summary: Per-page state seeded from mock data, with a reducer for each interactive page.

pub mod alerts;
pub mod dashboard;
pub mod reports;
pub mod settings;
pub mod usage;
pub mod users;

pub use alerts::{AlertsAction, AlertsState};
pub use dashboard::DashboardState;
pub use reports::{ReportsAction, ReportsState};
pub use settings::{SettingsAction, SettingsState};
pub use usage::{UsageAction, UsageState};
pub use users::{UsersAction, UsersState};

/// State of every page, as seen by the renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct Pages {
    pub dashboard: DashboardState,
    pub usage: UsageState,
    pub alerts: AlertsState,
    pub reports: ReportsState,
    pub settings: SettingsState,
    pub users: UsersState,
}

impl Pages {
    pub fn seed() -> Self {
        Self {
            dashboard: DashboardState::seed(),
            usage: UsageState::seed(),
            alerts: AlertsState::seed(),
            reports: ReportsState::seed(),
            settings: SettingsState::seed(),
            users: UsersState::seed(),
        }
    }
}

impl Default for Pages {
    fn default() -> Self { Self::seed() }
}
