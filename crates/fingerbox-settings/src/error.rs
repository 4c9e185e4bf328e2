//! Error types for the settings crate.

use fingerbox_joinery::BoxError;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading, saving or validating a job file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The job file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The job file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration directory could not be found.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl From<BoxError> for SettingsError {
    fn from(err: BoxError) -> Self {
        match err {
            BoxError::InvalidParameter { name, reason } => SettingsError::InvalidSetting {
                key: format!("box.{}", name),
                reason,
            },
            other => SettingsError::InvalidSetting {
                key: "box".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
