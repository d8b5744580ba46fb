//! CLI output helpers.

pub fn debug_enabled() -> bool {
    std::env::var_os("UMBRA_DEBUG").is_some_and(|v| !v.is_empty())
}

/// Extra diagnostics on stderr, enabled by `UMBRA_DEBUG`.
pub fn debug(msg: &str) {
    if debug_enabled() {
        eprintln!("umbra: {msg}");
    }
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", error_line(err));
}

fn error_line(err: &anyhow::Error) -> String {
    if debug_enabled() {
        format!("Error: {err:#}")
    } else {
        // Best-effort single line.
        format!("Error: {err}")
    }
}
