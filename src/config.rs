//! Persisted user settings.
//!
//! Settings live in a small JSON file under the platform config directory.
//! A missing file means defaults; command-line flags override whatever was
//! loaded. The text itself is never persisted.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Color scheme selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// The other theme, for the toggle key.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Analysis options plus theme, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Skip whitespace when counting characters.
    pub exclude_spaces: bool,
    /// Threshold for the over-length warning.
    pub character_limit: Option<usize>,
    /// Whether the threshold is enforced at all.
    pub limit_enabled: bool,
    pub theme: ThemeKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_spaces: true,
            character_limit: Some(300),
            limit_enabled: true,
            theme: ThemeKind::Dark,
        }
    }
}

/// Returns the path of the settings file.
#[must_use]
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("textlens/config.json")
}

/// Load settings from disk, falling back to defaults when no file exists.
pub fn load() -> Result<Config> {
    load_from(&config_path())
}

fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write settings back to disk, creating the directory if needed.
pub fn save(config: &Config) -> Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_widget() {
        let config = Config::default();
        assert!(config.exclude_spaces);
        assert_eq!(config.character_limit, Some(300));
        assert!(config.limit_enabled);
        assert_eq!(config.theme, ThemeKind::Dark);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            exclude_spaces: false,
            character_limit: None,
            limit_enabled: false,
            theme: ThemeKind::Light,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(config.theme, ThemeKind::Light);
        assert!(config.exclude_spaces);
        assert_eq!(config.character_limit, Some(300));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = std::env::temp_dir().join("textlens-test-config");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let path = PathBuf::from("/nonexistent/textlens/config.json");
        assert_eq!(load_from(&path).unwrap(), Config::default());
    }
}
