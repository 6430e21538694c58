// File: crates/dashboard/src/pages/alerts.rs
// Summary: Alerts page: active/resolved alert lists and alert preferences.

use chrono::TimeDelta;
use tracing::warn;

use crate::format::relative_age;
use crate::store::Reducer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Error,
    Info,
}

impl AlertKind {
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Warning => "⚠️",
            AlertKind::Error => "❌",
            AlertKind::Info => "ℹ️",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
            AlertKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub location: String,
    pub age: TimeDelta,
    pub resolved: bool,
}

impl Alert {
    /// "Building A • 2 hours ago"
    pub fn meta(&self) -> String {
        format!("{} • {}", self.location, relative_age(self.age))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    HighUsageWarnings,
    SystemErrors,
    MaintenanceReminders,
    EmailNotifications,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Preference::HighUsageWarnings,
        Preference::SystemErrors,
        Preference::MaintenanceReminders,
        Preference::EmailNotifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preference::HighUsageWarnings => "High usage warnings",
            Preference::SystemErrors => "System errors",
            Preference::MaintenanceReminders => "Maintenance reminders",
            Preference::EmailNotifications => "Email notifications",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// On/off switch per [`Preference`], all on by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertPreferences([bool; 4]);

impl Default for AlertPreferences {
    fn default() -> Self { Self([true; 4]) }
}

impl AlertPreferences {
    pub fn enabled(&self, pref: Preference) -> bool {
        self.0[pref.index()]
    }

    pub fn toggled(mut self, pref: Preference) -> Self {
        self.0[pref.index()] = !self.0[pref.index()];
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlertsState {
    pub alerts: Vec<Alert>,
    pub preferences: AlertPreferences,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertsAction {
    Dismiss(u32),
    Resolve(u32),
    TogglePreference(Preference),
}

impl AlertsState {
    pub fn seed() -> Self {
        let alert = |id, kind, title: &str, message: &str, location: &str, age, resolved| Alert {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            location: location.to_string(),
            age,
            resolved,
        };
        Self {
            alerts: vec![
                alert(1, AlertKind::Warning, "High Water Usage", "Building A has exceeded normal usage levels by 35%", "Building A", TimeDelta::hours(2), false),
                alert(2, AlertKind::Error, "System Malfunction", "Sensor at Irrigation System not responding", "Irrigation System", TimeDelta::hours(5), false),
                alert(3, AlertKind::Warning, "Maintenance Required", "Filter replacement due in Building C", "Building C", TimeDelta::days(1), false),
                alert(4, AlertKind::Info, "Scheduled Maintenance", "Routine maintenance completed successfully", "Building B", TimeDelta::days(2), true),
                alert(5, AlertKind::Warning, "Low Water Pressure", "Water pressure dropped below minimum threshold", "Outdoor Area", TimeDelta::days(3), true),
            ],
            preferences: AlertPreferences::default(),
        }
    }

    pub fn active(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| !a.resolved).collect()
    }

    pub fn resolved(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.resolved).collect()
    }
}

impl Reducer for AlertsState {
    type Action = AlertsAction;

    fn reduce(&self, action: AlertsAction) -> Self {
        let mut next = self.clone();
        match action {
            AlertsAction::Dismiss(id) => {
                next.alerts.retain(|a| a.id != id);
                if next.alerts.len() == self.alerts.len() {
                    warn!(id, "dismiss: no such alert");
                }
            }
            AlertsAction::Resolve(id) => match next.alerts.iter_mut().find(|a| a.id == id) {
                Some(alert) => alert.resolved = true,
                None => warn!(id, "resolve: no such alert"),
            },
            AlertsAction::TogglePreference(pref) => next.preferences = next.preferences.toggled(pref),
        }
        next
    }
}
