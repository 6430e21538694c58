// File: crates/dashboard/src/pages/settings.rs
// Summary: Settings page: editable draft, validated save, cancel back to the saved values.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::format::long_date;
use crate::store::Reducer;

/// How long the "saved" notice stays visible before the UI dismisses it.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);
pub const SAVED_NOTICE: &str = "✓ Settings saved successfully!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Timezone {
    #[default]
    Est,
    Cst,
    Mst,
    Pst,
    Utc,
}

impl Timezone {
    pub const ALL: [Timezone; 5] = [Timezone::Est, Timezone::Cst, Timezone::Mst, Timezone::Pst, Timezone::Utc];

    pub fn label(self) -> &'static str {
        match self {
            Timezone::Est => "EST",
            Timezone::Cst => "CST",
            Timezone::Mst => "MST",
            Timezone::Pst => "PST",
            Timezone::Utc => "UTC",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::English, Language::Spanish, Language::French, Language::German];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    pub fn value(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
            ThemeMode::Auto => "Auto (System)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Notifications,
    EmailAlerts,
    DailyReports,
    AutoBackup,
}

impl Toggle {
    pub const ALL: [Toggle; 4] = [Toggle::Notifications, Toggle::EmailAlerts, Toggle::DailyReports, Toggle::AutoBackup];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::Notifications => "Enable system notifications",
            Toggle::EmailAlerts => "Send email alerts for critical issues",
            Toggle::DailyReports => "Send daily usage reports",
            Toggle::AutoBackup => "Enable automatic data backup",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub organization: String,
    pub email: String,
    pub phone: String,
    pub timezone: Timezone,
    pub language: Language,
    pub theme: ThemeMode,
    pub notifications: bool,
    pub email_alerts: bool,
    pub daily_reports: bool,
    pub auto_backup: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            organization: "Water Management Corp".to_string(),
            email: "admin@watermanagement.com".to_string(),
            phone: "+1-555-0123".to_string(),
            timezone: Timezone::Est,
            language: Language::English,
            theme: ThemeMode::Light,
            notifications: true,
            email_alerts: true,
            daily_reports: false,
            auto_backup: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("organization name is required")]
    EmptyOrganization,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// `local@domain` with both parts non-empty and no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl SystemSettings {
    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Notifications => self.notifications,
            Toggle::EmailAlerts => self.email_alerts,
            Toggle::DailyReports => self.daily_reports,
            Toggle::AutoBackup => self.auto_backup,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.organization.trim().is_empty() {
            return Err(SettingsError::EmptyOrganization);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(SettingsError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    fn apply(&mut self, change: SettingsField) {
        match change {
            SettingsField::Organization(v) => self.organization = v,
            SettingsField::Email(v) => self.email = v,
            SettingsField::Phone(v) => self.phone = v,
            SettingsField::Timezone(v) => self.timezone = v,
            SettingsField::Language(v) => self.language = v,
            SettingsField::Theme(v) => self.theme = v,
            SettingsField::Toggle(t, on) => match t {
                Toggle::Notifications => self.notifications = on,
                Toggle::EmailAlerts => self.email_alerts = on,
                Toggle::DailyReports => self.daily_reports = on,
                Toggle::AutoBackup => self.auto_backup = on,
            },
        }
    }
}

/// Read-only facts shown in the System Information card.
pub fn system_info() -> Vec<(&'static str, String)> {
    let updated = NaiveDate::from_ymd_opt(2026, 2, 10).map(long_date).unwrap_or_default();
    vec![
        ("System Version", "2.1.0".to_string()),
        ("Last Updated", updated),
        ("Database Size", "1.2 GB".to_string()),
        ("API Endpoint", "api.watermanagement.local".to_string()),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Organization(String),
    Email(String),
    Phone(String),
    Timezone(Timezone),
    Language(Language),
    Theme(ThemeMode),
    Toggle(Toggle, bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsState {
    /// Values currently shown in the form.
    pub draft: SystemSettings,
    /// Values as of the last successful save.
    pub saved: SystemSettings,
    pub notice: bool,
    /// Successful saves so far; tags the notice each save raises.
    pub saves: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    Edit(SettingsField),
    Save,
    Cancel,
    /// Hide the notice raised by the save with this tag. Stale tags are ignored.
    DismissNotice(u64),
}

impl SettingsState {
    pub fn seed() -> Self {
        Self::from_saved(SystemSettings::default())
    }

    pub fn from_saved(saved: SystemSettings) -> Self {
        Self { draft: saved.clone(), saved, notice: false, saves: 0 }
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// Tag to pass to [`SettingsAction::DismissNotice`] while the notice is shown.
    pub fn notice_tag(&self) -> Option<u64> {
        self.notice.then_some(self.saves)
    }
}

impl Reducer for SettingsState {
    type Action = SettingsAction;

    fn reduce(&self, action: SettingsAction) -> Self {
        match action {
            SettingsAction::Edit(change) => {
                let mut draft = self.draft.clone();
                draft.apply(change);
                Self { draft, notice: false, ..self.clone() }
            }
            SettingsAction::Save => match self.draft.validate() {
                Ok(()) => {
                    debug!(organization = %self.draft.organization, saves = self.saves + 1, "settings saved");
                    Self { draft: self.draft.clone(), saved: self.draft.clone(), notice: true, saves: self.saves + 1 }
                }
                Err(e) => {
                    warn!(error = %e, "settings not saved");
                    self.clone()
                }
            },
            SettingsAction::Cancel => Self { draft: self.saved.clone(), notice: false, ..self.clone() },
            SettingsAction::DismissNotice(tag) if tag == self.saves => Self { notice: false, ..self.clone() },
            SettingsAction::DismissNotice(tag) => {
                debug!(tag, current = self.saves, "stale notice dismissal ignored");
                self.clone()
            }
        }
    }
}
