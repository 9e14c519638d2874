//! Client configuration
//!
//! Values come from defaults, an optional YAML file and the environment
//! (`.env` is honoured). The private key is only ever read from the
//! environment or set programmatically.

use crate::constants::{CLOB_API_URL, GAMMA_API_URL, POLYGON_CHAIN_ID};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const ENV_GAMMA_URL: &str = "POLYMARKET_GAMMA_URL";
pub const ENV_CLOB_URL: &str = "POLYMARKET_CLOB_URL";
pub const ENV_API_KEY: &str = "POLYMARKET_API_KEY";
pub const ENV_PRIVATE_KEY: &str = "POLYMARKET_PRIVATE_KEY";
pub const ENV_CHAIN_ID: &str = "POLYMARKET_CHAIN_ID";
pub const ENV_TIMEOUT: &str = "POLYMARKET_TIMEOUT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarMissing(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gamma_base_url: String,
    pub clob_base_url: String,

    /// Gamma bearer token
    pub api_key: Option<String>,

    /// Wallet key for CLOB authentication (never read from YAML)
    #[serde(skip)]
    pub private_key: Option<String>,

    pub chain_id: u64,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gamma_base_url: GAMMA_API_URL.to_string(),
            clob_base_url: CLOB_API_URL.to_string(),
            api_key: None,
            private_key: None,
            chain_id: POLYGON_CHAIN_ID,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the environment and `.env`
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Don't fail if .env doesn't exist

        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from YAML file, then secrets from the environment
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: Config = serde_yaml::from_str(&yaml_content)?;

        dotenv::dotenv().ok();

        config.apply_secrets(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The configured private key, or an error naming the variable to set
    pub fn require_private_key(&self) -> Result<&str> {
        self.private_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::EnvVarMissing(ENV_PRIVATE_KEY.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = non_empty(lookup(ENV_GAMMA_URL)) {
            self.gamma_base_url = url;
        }
        if let Some(url) = non_empty(lookup(ENV_CLOB_URL)) {
            self.clob_base_url = url;
        }
        if let Some(chain_id) = non_empty(lookup(ENV_CHAIN_ID)) {
            self.chain_id = parse_number(ENV_CHAIN_ID, &chain_id)?;
        }
        if let Some(timeout) = non_empty(lookup(ENV_TIMEOUT)) {
            self.timeout_secs = parse_number(ENV_TIMEOUT, &timeout)?;
        }

        self.apply_secrets(lookup);
        Ok(())
    }

    fn apply_secrets(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = non_empty(lookup(ENV_API_KEY)) {
            self.api_key = Some(key);
        }
        if let Some(key) = non_empty(lookup(ENV_PRIVATE_KEY)) {
            self.private_key = Some(key);
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("gamma_base_url", &self.gamma_base_url),
            ("clob_base_url", &self.clob_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.chain_id == 0 {
            return Err(ConfigError::ValidationError(
                "chain_id must be greater than 0".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number(name: &str, value: &str) -> Result<u64> {
    value.parse().map_err(|_| {
        ConfigError::ValidationError(format!("{} must be a number, got '{}'", name, value))
    })
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Config")
            .field("gamma_base_url", &self.gamma_base_url)
            .field("clob_base_url", &self.clob_base_url)
            .field("api_key", &redact(&self.api_key))
            .field("private_key", &redact(&self.private_key))
            .field("chain_id", &self.chain_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
