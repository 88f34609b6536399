//! BoxKit Settings Crate
//!
//! Handles engine configuration and its persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, ConfigFormat, LogFormat, LoggingSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::{config_directory, default_config_path, SettingsPersistence};
