//! Settings backend access via `gsettings`.

use std::ffi::OsString;
use std::process::Command;

use anyhow::{anyhow, Context};

const INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";
const BACKGROUND_SCHEMA: &str = "org.gnome.desktop.background";

/// Desktop settings access: the theme-name read plus the two background
/// keys.
pub trait SettingsBackend {
    /// Active GTK theme name.
    fn gtk_theme(&self) -> anyhow::Result<String>;

    /// Current background reference at `key`.
    fn background(&self, key: &str) -> anyhow::Result<String>;

    /// Point `key` at `uri`.
    fn set_background(&self, key: &str, uri: &str) -> anyhow::Result<()>;
}

fn gsettings_bin() -> OsString {
    std::env::var_os("UMBRA_GSETTINGS_BIN").unwrap_or_else(|| "gsettings".into())
}

/// `gsettings` is the stable CLI for dconf-backed settings.
#[derive(Debug)]
pub struct Gsettings {
    bin: OsString,
}

impl Gsettings {
    /// Probe the tool once so a missing backend fails before any key
    /// access.
    pub fn new() -> anyhow::Result<Self> {
        let bin = gsettings_bin();
        match Command::new(&bin).arg("help").output() {
            Ok(out) if out.status.success() => Ok(Self { bin }),
            Ok(_) => Err(anyhow!("settings backend unavailable (gsettings probe failed)")),
            Err(err) => Err(err).context("settings backend unavailable (gsettings not found)"),
        }
    }

    fn get(&self, schema: &str, key: &str) -> anyhow::Result<String> {
        let output = Command::new(&self.bin)
            .arg("get")
            .arg(schema)
            .arg(key)
            .output()
            .with_context(|| format!("run gsettings get {schema} {key}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("gsettings get {key} failed"))
                .with_context(|| stderr.trim().to_string());
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        Ok(unquote(raw.trim()).to_string())
    }
}

impl SettingsBackend for Gsettings {
    fn gtk_theme(&self) -> anyhow::Result<String> {
        self.get(INTERFACE_SCHEMA, "gtk-theme")
    }

    fn background(&self, key: &str) -> anyhow::Result<String> {
        self.get(BACKGROUND_SCHEMA, key)
    }

    fn set_background(&self, key: &str, uri: &str) -> anyhow::Result<()> {
        let status = Command::new(&self.bin)
            .arg("set")
            .arg(BACKGROUND_SCHEMA)
            .arg(key)
            .arg(uri)
            .status()
            .with_context(|| format!("run gsettings set {key}"))?;

        if !status.success() {
            return Err(anyhow!("gsettings set {key} failed"));
        }
        Ok(())
    }
}

/// Strip the GVariant quoting `gsettings get` puts around string values.
fn unquote(raw: &str) -> &str {
    raw.strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_exe(path: &std::path::Path, body: &str) {
        std::fs::write(path, body).unwrap();
        let mut perm = std::fs::metadata(path).unwrap().permissions();
        perm.set_mode(0o755);
        std::fs::set_permissions(path, perm).unwrap();
    }

    fn with_bin<F: FnOnce()>(bin: &std::path::Path, f: F) {
        let _g = ENV_LOCK.lock().unwrap();
        let old = std::env::var_os("UMBRA_GSETTINGS_BIN");

        unsafe { std::env::set_var("UMBRA_GSETTINGS_BIN", bin) };

        f();

        unsafe {
            match old {
                Some(v) => std::env::set_var("UMBRA_GSETTINGS_BIN", v),
                None => std::env::remove_var("UMBRA_GSETTINGS_BIN"),
            }
        }
    }

    #[test]
    fn unquote_strips_gvariant_string_quoting() {
        assert_eq!(unquote("'Adwaita-dark'"), "Adwaita-dark");
        assert_eq!(unquote("'file:///x/y'"), "file:///x/y");
        assert_eq!(unquote("Adwaita"), "Adwaita");
        assert_eq!(unquote("''"), "");
        assert_eq!(unquote("'"), "'");
    }

    #[test]
    fn probe_fails_when_the_backend_is_missing() {
        let dir = tempfile::tempdir().unwrap();

        with_bin(&dir.path().join("no-such-gsettings"), || {
            let err = Gsettings::new().unwrap_err();
            assert!(format!("{err:#}").contains("settings backend unavailable"));
        });
    }

    #[test]
    fn get_unquotes_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("gsettings");
        write_exe(&fake, "#!/bin/sh\n\n# fake gsettings\necho \"'Adwaita-dark'\"\nexit 0\n");

        with_bin(&fake, || {
            let backend = Gsettings::new().unwrap();
            assert_eq!(backend.gtk_theme().unwrap(), "Adwaita-dark");
        });
    }

    #[test]
    fn get_carries_stderr_into_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("gsettings");
        write_exe(
            &fake,
            r#"#!/bin/sh

# fake gsettings
case "$1" in
  help) exit 0 ;;
  get) echo "No such schema" 1>&2; exit 1 ;;
esac
exit 0
"#,
        );

        with_bin(&fake, || {
            let backend = Gsettings::new().unwrap();
            let err = backend.background("picture-uri").unwrap_err();
            let s = format!("{err:#}");
            assert!(s.contains("gsettings get picture-uri failed"));
            assert!(s.contains("No such schema"));
        });
    }

    #[test]
    fn set_passes_schema_key_and_value() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("gsettings");
        let log = dir.path().join("set.log");
        write_exe(
            &fake,
            &format!(
                "#!/bin/sh\n\n# fake gsettings\nif [ \"$1\" = set ]; then\n  echo \"$@\" >> \"{}\"\nfi\nexit 0\n",
                log.display()
            ),
        );

        with_bin(&fake, || {
            let backend = Gsettings::new().unwrap();
            backend
                .set_background("picture-uri-dark", "file:///tmp/bg")
                .unwrap();
        });

        let logged = std::fs::read_to_string(&log).unwrap();
        assert_eq!(
            logged.trim(),
            "set org.gnome.desktop.background picture-uri-dark file:///tmp/bg"
        );
    }

    #[test]
    fn rejected_set_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("gsettings");
        write_exe(
            &fake,
            "#!/bin/sh\n\n# fake gsettings\n[ \"$1\" = help ] && exit 0\nexit 1\n",
        );

        with_bin(&fake, || {
            let backend = Gsettings::new().unwrap();
            let err = backend
                .set_background("picture-uri", "file:///tmp/bg")
                .unwrap_err();
            assert!(format!("{err:#}").contains("gsettings set picture-uri failed"));
        });
    }
}
