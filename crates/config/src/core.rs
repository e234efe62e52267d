//! Configuration sections shared across crates

use crate::constants;
use serde::{Deserialize, Serialize};
use credsim_types::{ColorChoice, OutputFormat};
use std::time::Duration;

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    #[serde(default = "default_color_choice")]
    pub color: ColorChoice,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::Tty,
            color: ColorChoice::Auto,
        }
    }
}

/// Inclusive millisecond range a simulated delay is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    #[must_use]
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// A range that always yields the same delay
    #[must_use]
    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// Parse `MIN-MAX` (or a single `N`) in milliseconds
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let range = match value.split_once('-') {
            Some((min, max)) => Self::new(min.trim().parse().ok()?, max.trim().parse().ok()?),
            None => Self::fixed(value.parse().ok()?),
        };
        range.is_valid().then_some(range)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_ms <= self.max_ms
    }

    #[must_use]
    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    #[must_use]
    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

/// Simulated latency between and around record evaluations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Turn every simulated delay off
    #[serde(default)]
    pub disabled: bool,
    /// Fixed pause before reporting a malformed record
    #[serde(default = "default_malformed_delay")]
    pub malformed_delay_ms: u64,
    /// Simulated request latency before classification
    #[serde(default = "default_network_delay")]
    pub network_delay: DelayRange,
    /// Pause after a record has been reported
    #[serde(default = "default_inter_record_delay")]
    pub inter_record_delay: DelayRange,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            malformed_delay_ms: default_malformed_delay(),
            network_delay: default_network_delay(),
            inter_record_delay: default_inter_record_delay(),
        }
    }
}

/// Knobs for the classification heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Domains whose identifiers can ever be classified as working
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,
    /// Secrets shorter than this are rejected outright
    #[serde(default = "default_min_secret_length")]
    pub min_secret_length: usize,
    /// Secrets at least this long count as strong without character checks
    #[serde(default = "default_strong_secret_length")]
    pub strong_secret_length: usize,
    /// Probability that an eligible record is classified as working
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            allowed_domains: default_allowed_domains(),
            min_secret_length: default_min_secret_length(),
            strong_secret_length: default_strong_secret_length(),
            success_rate: default_success_rate(),
        }
    }
}

// Default value functions for serde
fn default_output_format() -> OutputFormat {
    OutputFormat::Tty
}

fn default_color_choice() -> ColorChoice {
    ColorChoice::Auto
}

fn default_malformed_delay() -> u64 {
    constants::MALFORMED_DELAY_MS
}

fn default_network_delay() -> DelayRange {
    DelayRange::new(
        constants::NETWORK_DELAY_MIN_MS,
        constants::NETWORK_DELAY_MAX_MS,
    )
}

fn default_inter_record_delay() -> DelayRange {
    DelayRange::new(
        constants::INTER_RECORD_DELAY_MIN_MS,
        constants::INTER_RECORD_DELAY_MAX_MS,
    )
}

fn default_allowed_domains() -> Vec<String> {
    constants::ALLOWED_DOMAINS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_min_secret_length() -> usize {
    constants::MIN_SECRET_LENGTH
}

fn default_strong_secret_length() -> usize {
    constants::STRONG_SECRET_LENGTH
}

fn default_success_rate() -> f64 {
    constants::SUCCESS_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_range_parses_min_max() {
        assert_eq!(DelayRange::parse("300-800"), Some(DelayRange::new(300, 800)));
        assert_eq!(DelayRange::parse(" 50 "), Some(DelayRange::fixed(50)));
        assert_eq!(DelayRange::parse("800-300"), None);
        assert_eq!(DelayRange::parse("fast"), None);
    }

    #[test]
    fn defaults_match_reference_values() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.malformed_delay_ms, 50);
        assert_eq!(pacing.network_delay, DelayRange::new(300, 800));
        assert_eq!(pacing.inter_record_delay, DelayRange::new(100, 300));

        let heuristic = HeuristicConfig::default();
        assert_eq!(
            heuristic.allowed_domains,
            vec!["gmail.com", "yahoo.com", "outlook.com"]
        );
        assert_eq!(heuristic.min_secret_length, 4);
        assert_eq!(heuristic.strong_secret_length, 8);
        assert!((heuristic.success_rate - 0.3).abs() < f64::EPSILON);
    }
}
