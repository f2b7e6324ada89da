//! Runtime settings read from environment variables.
//!
//! `main` loads `.env` with `dotenv` first, so the same variables can live
//! there. Command-line flags override these values.

use crate::output::OutputFormat;
use log::LevelFilter;
use std::path::PathBuf;

pub const LOG_CONFIG_VAR: &str = "CIDR_RECONCILE_LOG_CONFIG";
pub const LOG_LEVEL_VAR: &str = "CIDR_RECONCILE_LOG_LEVEL";
pub const FORMAT_VAR: &str = "CIDR_RECONCILE_FORMAT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Settings for the command-line tool.
#[derive(Debug, Clone)]
pub struct Settings {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Level of the fallback stderr logger.
    pub log_level: LevelFilter,
    /// Default output format.
    pub format: OutputFormat,
    /// Values that could not be parsed and were replaced by defaults.
    pub rejected: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: LevelFilter::Warn,
            format: OutputFormat::default(),
            rejected: Vec::new(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.trim().is_empty()) {
            settings.log_config = PathBuf::from(path.trim());
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            match level.trim().parse::<LevelFilter>() {
                Ok(level) => settings.log_level = level,
                Err(_) => settings.rejected.push(format!("{LOG_LEVEL_VAR}={level}")),
            }
        }
        if let Some(format) = lookup(FORMAT_VAR) {
            match format.parse::<OutputFormat>() {
                Ok(format) => settings.format = format,
                Err(_) => settings.rejected.push(format!("{FORMAT_VAR}={format}")),
            }
        }
        settings
    }

    /// Report rejected values. Call once logging is initialised.
    pub fn log_rejected(&self) {
        for value in &self.rejected {
            log::warn!("Ignoring invalid setting {value}, using default");
        }
    }
}
