// File: crates/dashboard/src/config.rs
// Summary: Dashboard configuration loaded from JSON (chart layout, theme, sample policy, initial shell state).

use std::path::{Path, PathBuf};

use chart_core::{theme, BarLayout, CanvasSpec, NegativePolicy, RenderOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::routes::Route;
use crate::shell::ShellState;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub canvas: CanvasSpec,
    pub bar_layout: BarLayout,
    /// Chart theme preset name; unknown names fall back to `light`.
    pub theme: String,
    pub dot_radius: f64,
    pub gridlines: usize,
    pub negative_policy: NegativePolicy,
    pub initial_route: Route,
    pub sidebar_open: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::default(),
            bar_layout: BarLayout::default(),
            theme: "light".to_string(),
            dot_radius: 5.0,
            gridlines: 5,
            negative_policy: NegativePolicy::default(),
            initial_route: Route::Dashboard,
            sidebar_open: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(s) => {
                let cfg = Self::from_json_str(&s)?;
                debug!(path = %path.display(), "config loaded");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source }),
        }
    }

    /// Like [`load`](Self::load) but never fails: problems are logged and defaults used.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load config, using defaults");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
    }

    pub fn render_options(&self) -> RenderOptions {
        if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&self.theme)) {
            warn!(theme = %self.theme, "unknown theme, using light");
        }
        RenderOptions {
            canvas: self.canvas,
            bar_layout: self.bar_layout,
            theme: theme::find(&self.theme),
            dot_radius: self.dot_radius,
            gridlines: self.gridlines,
            ..RenderOptions::default()
        }
    }

    pub fn shell(&self) -> ShellState {
        ShellState::new(self.initial_route, self.sidebar_open)
    }
}
