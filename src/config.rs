//! Configuration file handling for pixprint.
//!
//! Loads render defaults from `~/.config/pixprint/config.toml` or a custom path.
//! Command-line flags always win over values from the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::ResolutionPreset;

/// Configuration file structure for pixprint.
/// Loaded from ~/.config/pixprint/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub enhance: EnhanceConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub resolution: Option<ResolutionPreset>,
    #[serde(default = "default_one")]
    pub scale: f64,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub half_blocks: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            resolution: None,
            scale: 1.0,
            color: true,
            half_blocks: true,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnhanceConfig {
    #[serde(default = "default_one_f32")]
    pub contrast: f32,
    #[serde(default = "default_one_f32")]
    pub sharpness: f32,
    #[serde(default = "default_one_f32")]
    pub brightness: f32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            sharpness: 1.0,
            brightness: 1.0,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_one_f32() -> f32 {
    1.0
}

impl Config {
    /// Load configuration.
    ///
    /// With `Some(path)` the file must exist and parse. With `None` the
    /// default location is used, and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load and parse the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pixprint").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pixprint/config.toml")
        })
}
