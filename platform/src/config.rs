//! TOML-backed platform configuration.

use commons_types::PlatformParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// On-disk configuration. Missing fields fall back to defaults, so an empty
/// file is a valid configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub params: PlatformParams,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PlatformConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
