//! Loanbank Config - Configuration management
//!
//! Optional TOML file; every section has defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{DisplayConfig, DisplayFormat, LoanbankConfig, LoggingConfig, UpdateConfig};
