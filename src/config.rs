//! Badge configuration module.
//!
//! Loads and validates an optional `badge.toml`. Every key has a default, so
//! the file only needs the values it wants to change. A missing file means
//! stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! prefix = "bdg_"        # Prepended to derived output filenames
//! font = "Ubuntu-L"      # Font name or path when --font is not given
//! font_dirs = []         # Extra directories searched before system fonts
//! jpeg_quality = 75      # JPEG encoding quality (1-100)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `badge.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Prefix for output filenames derived from the input name.
    pub prefix: String,
    /// Font used when `--font` is absent.
    pub font: String,
    /// Directories searched for fonts before the system font directories.
    pub font_dirs: Vec<PathBuf>,
    /// JPEG encoding quality.
    pub jpeg_quality: u32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            prefix: "bdg_".to_string(),
            font: "Ubuntu-L".to_string(),
            font_dirs: Vec::new(),
            jpeg_quality: 75,
        }
    }
}

impl BadgeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            // An empty prefix would overwrite the input in place
            return Err(ConfigError::Validation("prefix must not be empty".into()));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "prefix must not contain path separators".into(),
            ));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Validation(
                "jpeg_quality must be 1-100".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from the TOML file at `path`.
///
/// Returns stock defaults if the file does not exist. Unknown keys and
/// out-of-range values are errors.
pub fn load_config(path: &Path) -> Result<BadgeConfig, ConfigError> {
    if !path.exists() {
        return Ok(BadgeConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: BadgeConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `badge.toml` with all keys and explanations.
///
/// Used by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# numbadge Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Prepended to the input filename when --out is not given:
#   photo.png            -> bdg_photo.png
#   photo.png --format jpeg -> bdg_photo.jpeg
prefix = "bdg_"

# Font used when --font is not given. Either a path, or a bare name that is
# looked up as <name>.ttf / <name>.otf in font_dirs and the system font
# directories. If no outline font loads, the value is tried as a BDF bitmap
# font file, which renders at its own fixed size.
font = "Ubuntu-L"

# Extra directories searched (recursively) before the system font directories.
font_dirs = []

# JPEG encoding quality (1 = worst, 100 = best).
jpeg_quality = 75
"##
}
