//! Optional defaults file.
//!
//! `~/.config/scopedim/config.yaml` supplies defaults for anything not given
//! on the command line:
//!
//! ```yaml
//! brightness: 0.8
//! temperature: 4500
//! runtime_dir: /run/user/1000/scopedim
//! displays: [":1"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Defaults loaded from the config file; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default brightness for `apply`.
    pub brightness: Option<f64>,
    /// Default temperature for `apply`, in Kelvin.
    pub temperature: Option<f64>,
    /// Directory the LUT files are written to.
    pub runtime_dir: Option<PathBuf>,
    /// Fixed display list, overriding auto-detection.
    pub displays: Option<Vec<String>>,
}

impl Config {
    /// Loads the defaults file, or an empty config if there is none.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

fn config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("scopedim").join("config.yaml"))
}

/// Resolves the LUT output directory: flag, then defaults file, then
/// `SCOPEDIM_RUNTIME_DIR`, then `$XDG_RUNTIME_DIR/scopedim`, then a
/// temp-directory fallback.
pub fn resolve_runtime_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.or_else(|| config.runtime_dir.clone())
        .or_else(|| std::env::var_os("SCOPEDIM_RUNTIME_DIR").map(PathBuf::from))
        .or_else(|| {
            std::env::var_os("XDG_RUNTIME_DIR").map(|dir| PathBuf::from(dir).join("scopedim"))
        })
        .unwrap_or_else(|| std::env::temp_dir().join("scopedim"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "brightness: 0.8\ntemperature: 4500\nruntime_dir: /tmp/scopedim\ndisplays: [\":1\", \":2\"]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.brightness, Some(0.8));
        assert_eq!(config.temperature, Some(4500.0));
        assert_eq!(config.runtime_dir, Some(PathBuf::from("/tmp/scopedim")));
        assert_eq!(
            config.displays,
            Some(vec![":1".to_owned(), ":2".to_owned()])
        );
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "brightnes: 0.8\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = Config {
            runtime_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        assert_eq!(
            resolve_runtime_dir(Some(PathBuf::from("/from/flag")), &config),
            PathBuf::from("/from/flag")
        );
        assert_eq!(
            resolve_runtime_dir(None, &config),
            PathBuf::from("/from/config")
        );
    }
}
