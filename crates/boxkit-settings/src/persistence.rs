//! Settings Persistence
//!
//! Locates the configuration file and keeps the loaded [`Config`] together
//! with the path it came from.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

/// Directory under the platform config dir holding our files.
pub const CONFIG_DIR_NAME: &str = "boxkit";
/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Platform configuration directory for the engine.
pub fn config_directory() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}

/// Default configuration file path, e.g. `~/.config/boxkit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Defaults bound to `path`, without touching the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        Ok(Self {
            config: Config::load_from_file(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Loads `path` if it exists, otherwise starts from defaults.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::new(path))
        }
    }

    /// Loads from [`default_config_path`].
    pub fn load_default_location() -> SettingsResult<Self> {
        Self::load_or_default(&default_config_path()?)
    }

    /// Save settings back to the file they belong to
    pub fn save(&self) -> SettingsResult<()> {
        self.config.save_to_file(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
