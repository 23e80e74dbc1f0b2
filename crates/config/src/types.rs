//! Configuration types

use loanbank_core::BlankPolicy;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanbankConfig {
    /// How listings are rendered
    #[serde(default)]
    pub display: DisplayConfig,

    /// Update semantics
    #[serde(default)]
    pub updates: UpdateConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output format for customer/loan listings and schedules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Column-aligned console table
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
    /// Markdown table with summary
    Markdown,
}

/// Display configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Listing format
    #[serde(default)]
    pub format: DisplayFormat,
}

/// Update configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// What a supplied empty string or zero does on update
    #[serde(default)]
    pub blank_values: BlankPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Log levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
