//! Background file locations and URIs.

use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::theme::ThemeMode;

/// Fixed per-mode destination of the installed wallpaper copy.
pub fn destination(home: &Path, mode: ThemeMode) -> PathBuf {
    home.join(".config").join(mode.file_name())
}

/// Render a path as the `file://` URI GNOME expects.
pub fn file_uri(path: &Path) -> anyhow::Result<String> {
    let s = path
        .to_str()
        .ok_or_else(|| anyhow!("path is not valid UTF-8"))?;
    Ok(format!("file://{s}"))
}
