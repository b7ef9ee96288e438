//! Configuration file handling for tintview.
//!
//! Loads configuration from `<config dir>/tintview/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::color::{CellColor, ColorDepth};

/// Configuration file structure for tintview.
/// Every field is optional; command-line flags override whatever is set here.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub color: ColorConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Terminal cell height / width.
    pub char_aspect_ratio: Option<f32>,
    /// `black` or `white`.
    pub background: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ColorConfig {
    /// `auto`, `truecolor`, `256`, `16` or `none`.
    pub depth: Option<String>,
}

impl Config {
    /// Load configuration from the default location.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named. The file must exist.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content, &path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Background color named in the file, if it is one we know.
    pub fn background(&self) -> Option<CellColor> {
        let name = self.display.background.as_deref()?;
        let color = CellColor::from_name(name);
        if color.is_none() {
            log::warn!("Unknown background '{}' in config file, ignoring", name);
        }
        color
    }

    /// Color depth forced by the file. `auto` and unknown names mean detect.
    pub fn depth(&self) -> Option<ColorDepth> {
        match self.color.depth.as_deref()?.to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Some(ColorDepth::TrueColor),
            "256" => Some(ColorDepth::Indexed256),
            "16" => Some(ColorDepth::Indexed16),
            "none" => Some(ColorDepth::Unknown),
            "auto" => None,
            other => {
                log::warn!("Unknown color depth '{}' in config file, ignoring", other);
                None
            }
        }
    }

    /// Character aspect ratio from the file, if positive and finite.
    pub fn char_aspect_ratio(&self) -> Option<f32> {
        self.display
            .char_aspect_ratio
            .filter(|r| r.is_finite() && *r > 0.0)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("tintview").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/tintview/config.toml")
        })
}
