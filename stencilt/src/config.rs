//! Configuration module for the stencilt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the stencilt application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, StencilError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "stencilt.toml";

/// Largest template `check` will read, in bytes.
const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Application configuration structure.
///
/// This struct represents the complete configuration for the stencilt CLI,
/// including global settings and command-specific options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Tokens-specific configuration.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Options for `stencilt tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Default output format (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,
}

/// Options for `stencilt check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// File extensions picked up when walking directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Templates larger than this many bytes are rejected.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_extensions() -> Vec<String> {
    ["html", "twig", "tpl", "j2"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/stencilt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StencilError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            StencilError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            StencilError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("stencilt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("stencilt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
