//! Configuration loader

use std::path::Path;
use thiserror::Error;

use crate::types::{LoanbankConfig, LOG_LEVELS};

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Loads and validates [`LoanbankConfig`]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LoanbankConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<LoanbankConfig, ConfigError> {
        let config: LoanbankConfig = toml::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load from file when a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<LoanbankConfig, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Ok(LoanbankConfig::default()),
        }
    }

    /// Validate configuration
    pub fn validate(config: &LoanbankConfig) -> Result<(), ConfigError> {
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}', expected one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
