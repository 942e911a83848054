//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use shareinfo_core::config::AppConfig;
use shareinfo_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            // The configuration was already loaded; check the values that are
            // only interpreted later.
            config.output.format.parse::<OutputFormat>()?;
            tracing_level_is_valid(&config.logging.level)?;
            log_format_is_valid(&config.logging.format)?;

            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Log level", &config.logging.level);
            output::print_kv("Log format", &config.logging.format);
            output::print_kv("Output format", &config.output.format);
            output::print_kv(
                "Include unknown keys",
                &config.output.include_unknown.to_string(),
            );
        }
    }

    Ok(())
}

fn tracing_level_is_valid(level: &str) -> Result<(), AppError> {
    tracing_subscriber::EnvFilter::try_new(level)
        .map(|_| ())
        .map_err(|e| AppError::configuration(format!("Invalid log level '{level}': {e}")))
}

fn log_format_is_valid(format: &str) -> Result<(), AppError> {
    match format {
        "json" | "pretty" => Ok(()),
        _ => Err(AppError::configuration(format!(
            "Invalid log format '{format}'. Expected one of: json, pretty"
        ))),
    }
}
