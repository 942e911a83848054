//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from an optional
//! TOML file overlaid with `SHAREINFO_`-prefixed environment variables.
//! Every field has a default, so running without any file is valid.

pub mod logging;
pub mod output;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::output::OutputConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides, e.g. `SHAREINFO_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "SHAREINFO";

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Output rendering defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from `path` (extension optional, file optional)
    /// and the environment.
    pub fn load(path: &str) -> Result<Self, AppError> {
        tracing::debug!(path, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
