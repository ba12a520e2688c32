use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{JournalError, Result};

const CONFIG_FILENAME: &str = "config.json";

/// Display theme preference. Stored independently of the journal itself;
/// applying it is the presentation layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_key(key: &str) -> Option<Theme> {
        match key {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Configuration for oneiro, stored in config.json next to the journal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalConfig {
    #[serde(default = "default_theme")]
    pub theme: Theme,
}

fn default_theme() -> Theme {
    Theme::Dark
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
        }
    }
}

impl JournalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JournalError::Io)?;
        let config: JournalConfig =
            serde_json::from_str(&content).unwrap_or_default();
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JournalError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JournalError::Serialization)?;
        fs::write(config_path, content).map_err(JournalError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(JournalConfig::default().theme, Theme::Dark);
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = JournalConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let config = JournalConfig {
            theme: Theme::Light,
        };
        config.save(temp.path()).unwrap();

        let loaded = JournalConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
        assert_eq!(Theme::from_key("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_key("sepia"), None);
    }

    #[test]
    fn toggling_flips_between_the_two() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
