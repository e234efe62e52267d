#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for credsim
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/credsim/config.toml)
//! - Environment variables
//! - CLI flags

pub mod constants;
pub mod core;

pub use self::core::{DelayRange, GeneralConfig, HeuristicConfig, PacingConfig};

use credsim_errors::{ConfigError, Error};
use credsim_types::{ColorChoice, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub pacing: PacingConfig,

    #[serde(default)]
    pub heuristic: HeuristicConfig,
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME))
    }

    /// Directory debug log files are written to
    #[must_use]
    pub fn logs_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::LOGS_DIR_NAME)
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has fields of
    /// the wrong type.
    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            tracing::debug!("no config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file.
    /// If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized
    /// or if the file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError {
                    path: parent.display().to_string(),
                    error: e.to_string(),
                })?;
        }

        let toml_string =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
                error: e.to_string(),
            })?;

        let content = format!(
            "# credsim configuration file\n\
             # Delays are in milliseconds. Classification is simulated.\n\n\
             {toml_string}"
        );

        fs::write(path, content)
            .await
            .map_err(|e| ConfigError::WriteError {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;

        Ok(())
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge overrides from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable with an unparsable value.
    pub fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), Error> {
        // CREDSIM_OUTPUT
        if let Some(output) = lookup("CREDSIM_OUTPUT") {
            self.general.default_output = match output.as_str() {
                "plain" => OutputFormat::Plain,
                "tty" => OutputFormat::Tty,
                "json" => OutputFormat::Json,
                _ => return Err(invalid_value("CREDSIM_OUTPUT", output)),
            };
        }

        // CREDSIM_COLOR
        if let Some(color) = lookup("CREDSIM_COLOR") {
            self.general.color = match color.as_str() {
                "always" => ColorChoice::Always,
                "auto" => ColorChoice::Auto,
                "never" => ColorChoice::Never,
                _ => return Err(invalid_value("CREDSIM_COLOR", color)),
            };
        }

        // CREDSIM_SUCCESS_RATE
        if let Some(rate) = lookup("CREDSIM_SUCCESS_RATE") {
            self.heuristic.success_rate = match rate.trim().parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => value,
                _ => return Err(invalid_value("CREDSIM_SUCCESS_RATE", rate)),
            };
        }

        // CREDSIM_NETWORK_DELAY_MS
        if let Some(delay) = lookup("CREDSIM_NETWORK_DELAY_MS") {
            self.pacing.network_delay = DelayRange::parse(&delay)
                .ok_or_else(|| invalid_value("CREDSIM_NETWORK_DELAY_MS", delay))?;
        }

        // CREDSIM_NO_DELAY
        if let Some(flag) = lookup("CREDSIM_NO_DELAY") {
            self.pacing.disabled = match flag.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(invalid_value("CREDSIM_NO_DELAY", flag)),
            };
        }

        // CREDSIM_ALLOWED_DOMAINS
        if let Some(domains) = lookup("CREDSIM_ALLOWED_DOMAINS") {
            let parsed: Vec<String> = domains
                .split(',')
                .map(|d| d.trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect();
            if parsed.is_empty() {
                return Err(invalid_value("CREDSIM_ALLOWED_DOMAINS", domains));
            }
            self.heuristic.allowed_domains = parsed;
        }

        Ok(())
    }

    /// Check cross-field invariants the loaders cannot express
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an out-of-range success rate, an
    /// inverted delay range or an empty domain allow-list.
    pub fn validate(&self) -> Result<(), Error> {
        let heuristic = &self.heuristic;
        if !(0.0..=1.0).contains(&heuristic.success_rate) {
            return Err(invalid(format!(
                "heuristic.success_rate must be within 0.0..=1.0, got {}",
                heuristic.success_rate
            )));
        }
        if heuristic.allowed_domains.iter().all(|d| d.trim().is_empty()) {
            return Err(invalid("heuristic.allowed_domains must not be empty"));
        }
        if heuristic.min_secret_length > heuristic.strong_secret_length {
            return Err(invalid(
                "heuristic.min_secret_length exceeds heuristic.strong_secret_length",
            ));
        }
        for (name, range) in [
            ("pacing.network_delay", self.pacing.network_delay),
            ("pacing.inter_record_delay", self.pacing.inter_record_delay),
        ] {
            if !range.is_valid() {
                return Err(invalid(format!(
                    "{name}: min_ms {} is greater than max_ms {}",
                    range.min_ms, range.max_ms
                )));
            }
        }
        Ok(())
    }
}

fn invalid_value(field: &str, value: String) -> Error {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value,
    }
    .into()
}

fn invalid(message: impl Into<String>) -> Error {
    ConfigError::Invalid {
        message: message.into(),
    }
    .into()
}
