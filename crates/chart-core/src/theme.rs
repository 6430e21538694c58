// File: crates/chart-core/src/theme.rs
// Summary: Named color themes for chart rendering (CSS color strings).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub dot_fill: &'static str,
    /// Top stop of the line/bar gradient.
    pub accent_start: &'static str,
    /// Bottom stop of the line/bar gradient.
    pub accent_end: &'static str,
    /// Opacity of the bottom stop for line strokes (bars stay opaque).
    pub line_fade: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            grid: "#ecf0f1",
            axis_line: "#333333",
            axis_label: "#555555",
            dot_fill: "#667eea",
            accent_start: "#667eea",
            accent_end: "#764ba2",
            line_fade: 0.3,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            dot_fill: "#40a0ff",
            accent_start: "#40a0ff",
            accent_end: "#8f6bff",
            line_fade: 0.4,
        }
    }

    pub fn ocean() -> Self {
        Self {
            name: "ocean",
            background: "#f4fbff",
            grid: "#d6ecf5",
            axis_line: "#0b3c5d",
            axis_label: "#0b3c5d",
            dot_fill: "#1d8cc9",
            accent_start: "#1d8cc9",
            accent_end: "#0b3c5d",
            line_fade: 0.35,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: "#000000",
            grid: "#222222",
            axis_line: "#ffffff",
            axis_label: "#ffffff",
            dot_fill: "#00ffff",
            accent_start: "#00ffff",
            accent_end: "#00aaff",
            line_fade: 1.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::ocean(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
