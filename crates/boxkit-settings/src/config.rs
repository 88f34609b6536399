//! Configuration management
//!
//! Provides configuration structures and file I/O for the editor engine.
//! Files are JSON or TOML, chosen by extension.

use std::path::Path;

use boxkit_core::InteractionSettings;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `boxkit_designer=trace`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Drag session behavior
    pub interaction: InteractionSettings,
    /// Log filter and output format
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from text in the given format.
    pub fn from_str_as(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration in the given format.
    pub fn to_string_as(&self, format: ConfigFormat) -> SettingsResult<String> {
        self.validate()?;
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_str_as(&content, format)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = self.to_string_as(ConfigFormat::from_path(path)?)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::SaveError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::SaveError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.interaction.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
