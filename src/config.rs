//! Persistent user settings
//!
//! The theme flag and optional default budget live in an explicit settings
//! struct with a single persistence boundary: a TOML file at
//! `~/.teambudget/config.toml`, loaded once at startup and written back on
//! change. No ambient global state.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    /// Default budget ceiling; the built-in default applies when unset
    #[serde(default)]
    pub budget: Option<u64>,
}

impl Settings {
    /// Load settings from the default path, creating defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let settings = Settings::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path).context("Failed to read settings file")?;

        let settings: Settings =
            toml::from_str(&contents).context("Failed to parse settings file")?;

        Ok(settings)
    }

    /// Save settings to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save settings to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, toml_string).context("Failed to write settings file")?;

        Ok(())
    }

    /// Settings file path: `~/.teambudget/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".teambudget").join("config.toml"))
    }

    /// Flip the theme and return the new value
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.budget.is_none());
    }

    #[test]
    fn test_toggle_theme() {
        let mut settings = Settings::default();
        assert_eq!(settings.toggle_theme(), Theme::Dark);
        assert_eq!(settings.toggle_theme(), Theme::Light);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            theme: Theme::Dark,
            budget: Some(80_000),
        };

        let toml_string = toml::to_string(&settings).unwrap();
        assert!(toml_string.contains("dark"));

        let back: Settings = toml::from_str(&toml_string).unwrap();
        assert_eq!(back.theme, Theme::Dark);
        assert_eq!(back.budget, Some(80_000));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let settings = Settings {
            theme: Theme::Dark,
            budget: Some(90_000),
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.budget, Some(90_000));
    }

    #[test]
    fn test_load_creates_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert!(path.exists());
    }
}
