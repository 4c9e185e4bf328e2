//! Job configuration for fingerbox
//!
//! A job file holds everything needed to cut one box:
//! - `[box]`: dimensions, thickness, box type, finger counts and overhang
//! - `[layout]`: sheet spacing, packing and origin offsets
//! - `[laser]`: passes, power, feed rate and Z handling
//!
//! Missing sections and keys fall back to their defaults.

use crate::error::{SettingsError, SettingsResult};
use fingerbox_joinery::{BoxParameters, LaserSettings, LayoutSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(Format::Json)
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        Ok(Format::Toml)
    } else {
        Err(SettingsError::UnsupportedFormat(format!(
            "{} (job files must be .json or .toml)",
            path.display()
        )))
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Complete job configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Box parameters
    #[serde(rename = "box")]
    pub box_params: BoxParameters,
    /// Sheet layout
    pub layout: LayoutSettings,
    /// Laser output
    pub laser: LaserSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<platform config dir>/fingerbox/job.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("fingerbox").join("job.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory(
                    "no configuration directory on this platform".to_string(),
                )
            })
    }

    /// Load a job file (JSON or TOML by extension) and validate it.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded job file {}", path.display());
        Ok(config)
    }

    /// Validate, then write the job file (JSON or TOML by extension).
    /// Missing parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!("Saved job file {}", path.display());
        Ok(())
    }

    /// Validate every section.
    pub fn validate(&self) -> SettingsResult<()> {
        self.box_params.validate()?;

        if !self.layout.spacing.is_finite() || self.layout.spacing < 0.0 {
            return Err(invalid("layout.spacing", "must be zero or positive"));
        }
        if !self.layout.offset_x.is_finite() || !self.layout.offset_y.is_finite() {
            return Err(invalid("layout.offset", "offsets must be finite"));
        }

        if self.laser.passes == 0 {
            return Err(invalid("laser.passes", "must be at least 1"));
        }
        if !self.laser.feed_rate.is_finite() || self.laser.feed_rate <= 0.0 {
            return Err(invalid("laser.feed_rate", "must be > 0"));
        }
        if !self.laser.z_step_down.is_finite() || self.laser.z_step_down < 0.0 {
            return Err(invalid("laser.z_step_down", "must be zero or positive"));
        }
        if !self.laser.safe_height.is_finite() {
            return Err(invalid("laser.safe_height", "must be finite"));
        }

        Ok(())
    }
}
