//! Quick terminal configuration struct and YAML persistence.
//!
//! Covers:
//! - `QuickTerminalConfig` and its defaults
//! - `load_from_path` / `save_to_path` (YAML file I/O with atomic write)
//! - `load` / `save` against the XDG-style `config_path`

use crate::error::ConfigError;
use crate::position::QuickTerminalPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name inside the par-term config directory
const CONFIG_FILE_NAME: &str = "quick-terminal.yaml";

/// Default show/hide animation duration in seconds
pub const DEFAULT_ANIMATION_DURATION: f32 = 0.2;

mod defaults {
    pub fn animation_duration() -> f32 {
        super::DEFAULT_ANIMATION_DURATION
    }

    pub fn paste_protection() -> bool {
        true
    }
}

/// Settings consumed by the quick terminal window controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickTerminalConfig {
    /// Screen edge the panel docks to
    /// - top (default), bottom, left, right: slide in from that edge
    /// - center: fade in centered on the screen
    #[serde(default)]
    pub position: QuickTerminalPosition,

    /// Target monitor index for the panel (0 = primary)
    /// Use None to place the panel on the primary display
    #[serde(default)]
    pub target_monitor: Option<usize>,

    /// Duration in seconds of the show/hide animation
    #[serde(default = "defaults::animation_duration")]
    pub animation_duration: f32,

    /// Ask for confirmation before pasting text that looks like it would run commands
    #[serde(default = "defaults::paste_protection")]
    pub paste_protection: bool,
}

impl Default for QuickTerminalConfig {
    fn default() -> Self {
        Self {
            position: QuickTerminalPosition::default(),
            target_monitor: None,
            animation_duration: defaults::animation_duration(),
            paste_protection: defaults::paste_protection(),
        }
    }
}

impl QuickTerminalConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the docking position
    pub fn with_position(mut self, position: QuickTerminalPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the target monitor index
    pub fn with_target_monitor(mut self, index: usize) -> Self {
        self.target_monitor = Some(index);
        self
    }

    /// Set the animation duration in seconds
    pub fn with_animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Check field values that serde cannot reject on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.animation_duration.is_finite() || self.animation_duration < 0.0 {
            return Err(ConfigError::Validation(format!(
                "animation_duration must be a non-negative number of seconds, got {}",
                self.animation_duration
            )));
        }
        Ok(())
    }

    /// Load configuration from the default config path, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if the file does not exist
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!(
                "Quick terminal config not found at {:?}, using defaults",
                path
            );
            return Ok(Self::default());
        }

        log::info!("Loading quick terminal config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::debug!(
            "Quick terminal config: position={} target_monitor={:?} animation_duration={}",
            config.position,
            config.target_monitor,
            config.animation_duration
        );
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to a YAML null, not an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default config path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(&Self::config_path())
    }

    /// Save configuration to `path`
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        log::info!("Saved quick terminal config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("par-term").join(CONFIG_FILE_NAME)
            } else {
                PathBuf::from(CONFIG_FILE_NAME)
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/par-term/quick-terminal.yaml on every Unix, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir
                    .join(".config")
                    .join("par-term")
                    .join(CONFIG_FILE_NAME)
            } else {
                PathBuf::from(CONFIG_FILE_NAME)
            }
        }
    }
}
