//! Rendering configuration.
//!
//! Settings are read from a TOML file. Missing files and missing keys fall
//! back to the defaults below.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BUTTON_KIT_CONFIG";

/// Options applied to every rendered button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Value of the `data-slot` attribute; `None` omits the attribute.
    pub data_slot: Option<String>,
    /// Class of the loading spinner icon.
    pub spinner_class: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            data_slot: Some("button".to_string()),
            spinner_class: "animate-spin".to_string(),
        }
    }
}

impl ButtonConfig {
    /// Load from the default path.
    ///
    /// Default path: `<config dir>/button-kit/config.toml`
    /// Can be overridden with the `BUTTON_KIT_CONFIG` environment variable.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        directories::ProjectDirs::from("", "", "button-kit")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("button-kit.toml"))
    }

    /// Load from a specific path; a missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no button config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded button config");
        Ok(config)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
