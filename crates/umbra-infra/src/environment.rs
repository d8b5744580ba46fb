//! Process environment lookups.

use std::path::PathBuf;

use crate::output;

/// Access to the per-user environment.
pub trait Environment {
    /// The invoking user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Resolver backed by `$HOME` with an OS user-database fallback.
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
            output::debug("home directory from HOME");
            return Some(PathBuf::from(home));
        }

        // Autostart sessions may come up without HOME; the user database
        // still knows it.
        let dir = dirs::home_dir();
        if dir.is_some() {
            output::debug("home directory from user database");
        }
        dir
    }
}
