//! Configuration management for the contact book.
//!
//! Settings come from environment variables, with a `.env` file in the
//! working directory honored if present. Every setting has a default, so
//! an empty environment gives the classic behavior: `contacts_data.json`
//! and `contacts_export.csv` in the current directory.

use crate::error::{ConfigError, ConfigResult};
use crate::reports::DEFAULT_EXPORT_FILE;
use crate::repositories::DEFAULT_DATA_FILE;
use std::env;
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing JSON file (default: contacts_data.json)
    pub data_file: PathBuf,

    /// CSV export target (default: contacts_export.csv)
    pub export_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_FILE`: path of the backing JSON file
    /// - `CONTACTS_EXPORT_FILE`: path written by CSV export
    /// - `LOG_LEVEL`: trace, debug, info, warn or error
    pub fn from_env() -> ConfigResult<Self> {
        // .env is optional; dotenvy never writes to stdout
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let data_file = Self::parse_env_path("CONTACTS_DATA_FILE", defaults.data_file)?;
        let export_file = Self::parse_env_path("CONTACTS_EXPORT_FILE", defaults.export_file)?;

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ConfigError::InvalidValue {
                        var: "LOG_LEVEL".to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), val),
                    });
                }
                level
            }
            Err(_) => defaults.log_level,
        };

        if data_file == export_file {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_EXPORT_FILE".to_string(),
                reason: "Must differ from CONTACTS_DATA_FILE".to_string(),
            });
        }

        Ok(Config {
            data_file,
            export_file,
            log_level,
        })
    }

    /// Parse an environment variable as a non-blank path with a default value.
    fn parse_env_path(var_name: &str, default: PathBuf) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val.trim())),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            log_level: "warn".to_string(),
        }
    }
}
