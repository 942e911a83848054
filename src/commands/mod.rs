//! CLI command definitions and dispatch.

pub mod config;
pub mod inspect;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use shareinfo_core::config::AppConfig;
use shareinfo_core::error::AppError;

/// shareinfo: inspect share records from an OCS file-sharing API
#[derive(Debug, Parser)]
#[command(name = "shareinfo", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional, file optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format (overrides `output.format` from the configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the normalized view of share records
    Inspect(inspect::InspectArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let format = self.output_format(config)?;

        match &self.command {
            Commands::Inspect(args) => inspect::execute(args, config, format).await,
            Commands::Config(args) => config::execute(args, config, &self.config, format),
        }
    }

    /// Resolve the output format: command line first, then configuration.
    pub fn output_format(&self, config: &AppConfig) -> Result<OutputFormat, AppError> {
        match self.format {
            Some(format) => Ok(format),
            None => config.output.format.parse(),
        }
    }
}
