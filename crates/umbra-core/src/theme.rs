//! Theme-mode classification.

/// Theme names containing any of these count as dark, case-insensitively.
const DARK_MARKERS: [&str; 3] = ["dark", "night", "black"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Background key under `org.gnome.desktop.background`.
    /// The dark variant exists since GNOME 42.
    pub fn settings_key(self) -> &'static str {
        match self {
            Self::Dark => "picture-uri-dark",
            Self::Light => "picture-uri",
        }
    }

    /// File name of the per-mode wallpaper copy under `~/.config`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Dark => "background_dark",
            Self::Light => "background",
        }
    }
}

/// Classify a GTK theme name. Substring heuristic only; anything without
/// a dark marker counts as light.
pub fn classify(theme_name: &str) -> ThemeMode {
    let lower = theme_name.to_ascii_lowercase();
    if DARK_MARKERS.iter().any(|marker| lower.contains(marker)) {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}
