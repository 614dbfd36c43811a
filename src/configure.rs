use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::transfer_client::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT};

pub const CONFIG_FILE: &str = "config/config.yaml";
pub const ENV_PREFIX: &str = "APP";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FILE: &str = "log/transfer_client.log";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub log_level: String,
    pub log_to_file: bool,
    pub log_file: String,
}

impl AppConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT.as_secs(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_file: false,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Defaults, then `config/config.yaml` if present, then `APP_*` variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(CONFIG_FILE)
}

pub fn load_config_from(path: &str) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let s = Config::builder()
        // Set defaults
        .set_default("base_url", defaults.base_url)?
        .set_default("connect_timeout_secs", defaults.connect_timeout_secs)?
        .set_default("log_level", defaults.log_level)?
        .set_default("log_to_file", defaults.log_to_file)?
        .set_default("log_file", defaults.log_file)?
        // Add configuration from a file
        .add_source(File::with_name(path).required(false))
        // Add configuration from environment variables
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;

    s.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_client_constants() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:8123");
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config_from("config/does_not_exist.yaml").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.log_file, "log/transfer_client.log");
    }

    #[test]
    fn test_shipped_file_agrees_with_defaults() {
        let from_file = load_config_from(CONFIG_FILE).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(from_file.base_url, defaults.base_url);
        assert_eq!(from_file.connect_timeout_secs, defaults.connect_timeout_secs);
    }
}
