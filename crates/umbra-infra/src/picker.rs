//! Interactive image selection via `zenity`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;

/// Interactive source-image selection.
pub trait FilePicker {
    /// Path chosen by the user. Empty when the dialog produced nothing.
    fn pick_image(&self) -> anyhow::Result<PathBuf>;
}

fn zenity_bin() -> OsString {
    std::env::var_os("UMBRA_ZENITY_BIN").unwrap_or_else(|| "zenity".into())
}

/// Picker backed by the `zenity --file-selection` dialog. Blocks until
/// the dialog is closed.
pub struct ZenityPicker;

impl FilePicker for ZenityPicker {
    fn pick_image(&self) -> anyhow::Result<PathBuf> {
        let output = Command::new(zenity_bin())
            .arg("--file-selection")
            .arg("--title=Select an Image")
            .arg("--file-filter=Image Files | *.png *.jpg *.jpeg")
            .arg("--file-filter=All Files | *")
            .output()
            .context("launch file picker (zenity)")?;

        // The dialog's exit status is ignored: cancellation prints
        // nothing, and the empty path fails the later copy.
        let selected = String::from_utf8_lossy(&output.stdout);
        Ok(PathBuf::from(selected.trim_end_matches(['\r', '\n'])))
    }
}
