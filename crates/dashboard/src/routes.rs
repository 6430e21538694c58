// File: crates/dashboard/src/routes.rs
// Summary: Page routes, their paths and sidebar metadata.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Dashboard,
    Usage,
    Alerts,
    Reports,
    Settings,
    Users,
}

/// Sidebar entries, top to bottom.
pub const NAV_ITEMS: [Route; 6] = [
    Route::Dashboard,
    Route::Usage,
    Route::Alerts,
    Route::Reports,
    Route::Users,
    Route::Settings,
];

impl Route {
    /// Every route, in declaration order.
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Usage,
        Route::Alerts,
        Route::Reports,
        Route::Settings,
        Route::Users,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Usage => "/usage",
            Route::Alerts => "/alerts",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
            Route::Users => "/users",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Usage => "Usage Monitor",
            Route::Alerts => "Alerts",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
            Route::Users => "Users",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Dashboard => "📊",
            Route::Usage => "📈",
            Route::Alerts => "🔔",
            Route::Reports => "📋",
            Route::Settings => "⚙️",
            Route::Users => "👥",
        }
    }

    /// Page header title.
    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Usage => "Usage Monitor",
            Route::Alerts => "Alerts & Notifications",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
            Route::Users => "User Management",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Route::Dashboard => "Welcome back! Here's your water management overview.",
            Route::Usage => "Track and analyze water usage across all zones and time periods.",
            Route::Alerts => "Monitor and manage system alerts and notifications.",
            Route::Reports => "Generate and access water management reports and analytics.",
            Route::Settings => "Manage system configuration and preferences.",
            Route::Users => "Manage system users and their permissions.",
        }
    }

    /// File name used when the page is exported as static HTML.
    pub fn file_name(self) -> &'static str {
        match self {
            Route::Dashboard => "index.html",
            Route::Usage => "usage.html",
            Route::Alerts => "alerts.html",
            Route::Reports => "reports.html",
            Route::Settings => "settings.html",
            Route::Users => "users.html",
        }
    }

    /// Exact path lookup; one trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for r in Route::ALL {
            assert_eq!(Route::from_path(r.path()), Some(r));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated_once() {
        assert_eq!(Route::from_path("/usage/"), Some(Route::Usage));
        assert_eq!(Route::from_path("/usage//"), None);
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/Usage"), None);
    }
}
