use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings loaded from `~/.config/ccheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Label printed before the severity, e.g. `Checksum OK: Files match.`.
    pub check_name: String,
    /// Report failures as WARNING instead of CRITICAL even without `--warn-only`.
    pub warn_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            check_name: "Checksum".to_string(),
            warn_only: false,
        }
    }
}

/// Default settings path. The file is not created; it may not exist.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ccheck")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing default file yields defaults. An explicitly given path must exist.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (config_path()?, false),
    };
    if !required && !path.exists() {
        tracing::debug!("no settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(&path)
        .with_context(|| format!("read settings {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&data).with_context(|| format!("parse settings {}", path.display()))?;
    tracing::debug!("loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_values() {
        let s = Settings::default();
        assert_eq!(s.check_name, "Checksum");
        assert!(!s.warn_only);
    }

    #[test]
    fn settings_toml_partial() {
        let s: Settings = toml::from_str("warn_only = true").unwrap();
        assert!(s.warn_only);
        assert_eq!(s.check_name, "Checksum");
    }

    #[test]
    fn settings_toml_custom_name() {
        let s: Settings = toml::from_str(r#"check_name = "ReleaseArtifacts""#).unwrap();
        assert_eq!(s.check_name, "ReleaseArtifacts");
    }

    #[test]
    fn settings_toml_rejects_unknown_keys() {
        assert!(toml::from_str::<Settings>("algorithm = \"md5\"").is_err());
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "check_name = \"Etc\"\nwarn_only = true\n").unwrap();
        let s = load(Some(&path)).unwrap();
        assert_eq!(
            s,
            Settings {
                check_name: "Etc".into(),
                warn_only: true
            }
        );
    }

    #[test]
    fn load_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("none.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("read settings"));
    }
}
