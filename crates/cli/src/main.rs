//! Loanbank CLI - Interactive bank loan management
//!
//! Usage:
//! ```bash
//! loanbank
//! loanbank --format csv
//! loanbank --config loanbank.toml --blank-values apply
//! loanbank --log-level debug 2> loanbank.log
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use loanbank_business::Bank;
use loanbank_config::{ConfigLoader, DisplayFormat};
use loanbank_core::BlankPolicy;
use std::io;
use std::path::PathBuf;

mod input;
mod menu;

use menu::Menu;

/// Loanbank - customers and their loans, managed from a text menu
#[derive(Parser)]
#[command(name = "loanbank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Listing format, overrides the config file
    #[arg(long)]
    pub format: Option<FormatArg>,

    /// What an empty or zero value does on update
    #[arg(long)]
    pub blank_values: Option<BlankPolicyArg>,

    /// Log level written to stderr
    #[arg(long)]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Json,
    Markdown,
}

impl FormatArg {
    pub fn to_config_format(&self) -> DisplayFormat {
        match self {
            FormatArg::Table => DisplayFormat::Table,
            FormatArg::Csv => DisplayFormat::Csv,
            FormatArg::Json => DisplayFormat::Json,
            FormatArg::Markdown => DisplayFormat::Markdown,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BlankPolicyArg {
    /// Empty text and zero numbers leave the field unchanged
    Skip,
    /// Empty text and zero numbers are stored
    Apply,
}

impl BlankPolicyArg {
    pub fn to_core_policy(&self) -> BlankPolicy {
        match self {
            BlankPolicyArg::Skip => BlankPolicy::Skip,
            BlankPolicyArg::Apply => BlankPolicy::Apply,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevelArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevelArg::Trace => "trace",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Info => "info",
            LogLevelArg::Warn => "warn",
            LogLevelArg::Error => "error",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(format) = cli.format {
        config.display.format = format.to_config_format();
    }
    if let Some(policy) = cli.blank_values {
        config.updates.blank_values = policy.to_core_policy();
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level.as_str().to_string();
    }

    let level: tracing::Level = config
        .logging
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.logging.level))?;

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    tracing::info!(
        format = ?config.display.format,
        blank_values = %config.updates.blank_values,
        "starting loanbank"
    );

    let bank = Bank::with_policy(config.updates.blank_values);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut menu = Menu::new(bank, stdin.lock(), stdout.lock(), config.display.format);
    menu.run().context("Menu session failed")?;

    tracing::info!(
        customers = menu.bank().customer_count(),
        loans = menu.bank().loan_count(),
        "session ended"
    );

    Ok(())
}
