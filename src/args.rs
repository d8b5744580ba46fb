//! CLI argument definitions.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use umbra_core::theme::ThemeMode;

#[derive(Debug, Parser)]
#[command(name = "umbra")]
#[command(about = "Theme-aware wallpaper selector for GNOME desktops", long_about = None)]
pub struct Cli {
    /// Image file
    #[arg(short, long)]
    pub img: Option<PathBuf>,

    /// Force dark theme mode
    #[arg(short, long)]
    pub dark: bool,

    /// Force white theme mode
    #[arg(short, long)]
    pub white: bool,
}

/// Map the mode flags to a forced mode, if any. Checked here rather than
/// with a clap conflict so both flags together exit 1, not clap's usage
/// code.
pub fn forced_mode(dark: bool, white: bool) -> anyhow::Result<Option<ThemeMode>> {
    match (dark, white) {
        (true, true) => Err(anyhow!("cannot force both dark and white modes")),
        (true, false) => Ok(Some(ThemeMode::Dark)),
        (false, true) => Ok(Some(ThemeMode::Light)),
        (false, false) => Ok(None),
    }
}
