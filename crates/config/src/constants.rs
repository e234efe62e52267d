//! Built-in defaults for the simulated verifier
//!
//! These mirror the pacing and heuristic values of the reference behaviour
//! and are what an empty config file resolves to.

pub const CONFIG_DIR_NAME: &str = "credsim";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOGS_DIR_NAME: &str = "logs";

pub const MALFORMED_DELAY_MS: u64 = 50;
pub const NETWORK_DELAY_MIN_MS: u64 = 300;
pub const NETWORK_DELAY_MAX_MS: u64 = 800;
pub const INTER_RECORD_DELAY_MIN_MS: u64 = 100;
pub const INTER_RECORD_DELAY_MAX_MS: u64 = 300;

pub const ALLOWED_DOMAINS: [&str; 3] = ["gmail.com", "yahoo.com", "outlook.com"];
pub const MIN_SECRET_LENGTH: usize = 4;
pub const STRONG_SECRET_LENGTH: usize = 8;
pub const SUCCESS_RATE: f64 = 0.3;
