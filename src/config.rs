//! Editor configuration persistence
//!
//! Stores preset and entry preferences in
//! `~/.config/tolerance-editor/config.yaml`

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{default_presets, ConfirmPolicy, PresetError, PresetOption};
use crate::strings::SupportedLocale;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Quick-pick options, in display order
    #[serde(default = "default_presets")]
    pub presets: Vec<PresetOption>,

    /// Highest percent the custom field accepts
    #[serde(default = "default_max_percent")]
    pub max_percent: f64,

    /// What confirm does with text that is not a valid tolerance
    #[serde(default)]
    pub confirm_policy: ConfirmPolicy,

    /// UI language
    #[serde(default)]
    pub locale: SupportedLocale,
}

fn default_max_percent() -> f64 {
    100.0
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            max_percent: default_max_percent(),
            confirm_policy: ConfirmPolicy::default(),
            locale: SupportedLocale::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read config at {}: {}", path.display(), e))
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse config at {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| ConfigError::Io("No config directory available".to_string()))?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            ConfigError::Io(format!("Failed to write config to {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Reject configs the editor cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::Preset(PresetError::Empty));
        }
        if !(self.max_percent.is_finite() && self.max_percent > 0.0) {
            return Err(ConfigError::InvalidMaxPercent(self.max_percent));
        }
        Ok(())
    }
}

/// Errors that can occur when loading or saving config
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Preset(PresetError),
    InvalidMaxPercent(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Preset(e) => write!(f, "Preset error: {}", e),
            ConfigError::InvalidMaxPercent(v) => {
                write!(f, "max_percent must be a positive number, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<PresetError> for ConfigError {
    fn from(e: PresetError) -> Self {
        ConfigError::Preset(e)
    }
}
