//! The theme/background synchronizer.

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};

use umbra_core::background;
use umbra_core::theme::{self, ThemeMode};

use crate::environment::Environment;
use crate::output;
use crate::picker::FilePicker;
use crate::settings::SettingsBackend;

/// Inputs of one run.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Mode forced by a flag; `None` means classify the active theme.
    pub forced: Option<ThemeMode>,
    /// Explicit source image; `None` invokes the interactive picker.
    pub image: Option<PathBuf>,
}

/// Run the linear sequence: resolve the mode, point the background key
/// at the fixed per-mode file, then install the chosen image there.
pub fn run(
    request: &Request,
    settings: &dyn SettingsBackend,
    picker: &dyn FilePicker,
    env: &dyn Environment,
) -> anyhow::Result<()> {
    let mode = match request.forced {
        Some(mode) => mode,
        None => {
            let name = settings.gtk_theme().context("read gtk-theme")?;
            theme::classify(&name)
        }
    };

    let key = mode.settings_key();

    // Display-only; a missing or unreadable key must not stop the write.
    match settings.background(key) {
        Ok(current) => println!("Current background: {current}"),
        Err(err) => output::print_error(&err.context("failed to read current background")),
    }

    let home = env.home_dir().context("home directory not available")?;
    let dest = background::destination(&home, mode);
    let uri = background::file_uri(&dest)?;

    output::debug(&format!("writing {key} = {uri}"));
    settings
        .set_background(key, &uri)
        .with_context(|| format!("write {key}"))?;
    println!("Background set to: {uri}");

    let source = match &request.image {
        Some(path) => path.clone(),
        None => picker.pick_image()?,
    };

    // fs::copy truncates the destination before it reads, so an
    // unguarded self-copy would empty the installed file.
    if same_file(&source, &dest) {
        return Err(anyhow!("source and destination are the same file"))
            .with_context(|| format!("copy {} to {}", source.display(), dest.display()));
    }

    fs::copy(&source, &dest)
        .with_context(|| format!("copy {} to {}", source.display(), dest.display()))?;
    println!("Copied {} to {}", source.display(), dest.display());

    Ok(())
}

/// True when both paths name the same existing file (same device and
/// inode, symlinks followed).
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}
