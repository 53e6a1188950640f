// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{TimerSetting, booth_limits};
use crate::errors::{AppError, AppResult};
use crate::media::encoders::{EncodingFormat, EncodingQuality};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Filter id applied to new captures (None = no filter)
    pub default_filter: Option<String>,
    /// Photo output format (JPEG or PNG)
    pub output_format: EncodingFormat,
    /// JPEG encoding quality preset
    pub encoding_quality: EncodingQuality,
    /// Number of shots per photobooth session
    pub shot_count: u32,
    /// Countdown timer preset between shots
    pub timer: TimerSetting,
    /// Caption drawn in the strip header band
    pub strip_caption: String,
    /// Studio label drawn in the strip footer band
    pub studio_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_filter: None,
            output_format: EncodingFormat::Jpeg,
            encoding_quality: EncodingQuality::High,
            shot_count: booth_limits::SHOTS_DEFAULT,
            timer: TimerSetting::default(),
            strip_caption: "PHOTOBOOTH".to_string(),
            studio_label: "MADE WITH LOVE".to_string(),
        }
    }
}

impl Config {
    /// Path of the persisted configuration file
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("photobooth").join("config.json"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("No config directory available, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Config loaded");
                    config
                }
                Err(err) => {
                    warn!(?err, path = %path.display(), "Malformed config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist the configuration as JSON.
    pub fn save(&self) -> AppResult<()> {
        let path = Self::path()
            .ok_or_else(|| AppError::Config("no config directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("failed to create config dir: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(&path, contents)
            .map_err(|e| AppError::Config(format!("failed to write config: {}", e)))?;

        debug!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Shot count clamped to the supported session range.
    pub fn clamped_shot_count(&self) -> u32 {
        self.shot_count
            .clamp(booth_limits::SHOTS_MIN, booth_limits::SHOTS_MAX)
    }
}
