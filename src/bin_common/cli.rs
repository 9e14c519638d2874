//! CLI utilities for binaries
//!
//! Handles configuration loading and argument parsing for the binaries.

use polymarket_client::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "POLYMARKET_CONFIG_PATH";

pub const DEFAULT_CONFIG_PATH: &str = "config/polymarket.yaml";

/// Load configuration path from environment or use default
pub fn load_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

/// Load `Config` from `path` when the file exists, otherwise from the environment
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.is_file() {
        Config::load(path)
    } else {
        Config::from_env()
    }
}

/// Load `Config` from the configured path, falling back to the environment
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(load_config_path())
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// Parse an optional nonce argument; absent means 0
pub fn parse_nonce(arg: Option<&str>) -> Result<u64, String> {
    match arg {
        None => Ok(0),
        Some(s) => s
            .parse()
            .map_err(|_| format!("Invalid nonce '{}': expected a non-negative integer", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nonce() {
        assert_eq!(parse_nonce(None), Ok(0));
        assert_eq!(parse_nonce(Some("42")), Ok(42));
        assert!(parse_nonce(Some("-1")).is_err());
        assert!(parse_nonce(Some("abc")).is_err());
    }

    #[test]
    fn test_default_config_path() {
        assert_eq!(DEFAULT_CONFIG_PATH, "config/polymarket.yaml");
        assert_eq!(CONFIG_PATH_ENV, "POLYMARKET_CONFIG_PATH");
    }
}
