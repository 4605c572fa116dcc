//! Application configuration
//!
//! Aggregates the per-service configuration sections and loads them from an
//! optional `config.toml` plus `BITEMAP_`-prefixed environment variables
//! (e.g. `BITEMAP_DISCOVERY__BASE_URL`, `BITEMAP_DIRECTIONS__API_KEY`).

use std::path::Path;

use integration_directions::DirectionsConfig;
use integration_discovery::DiscoveryConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Discovery backend configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Directions provider configuration
    #[serde(default)]
    pub directions: DirectionsConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Reads `config.toml` from the working directory when present, then
    /// applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value fails to
    /// deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a specific file, then environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value fails to
    /// deserialize.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Validate all configuration sections
    ///
    /// # Errors
    ///
    /// Returns the first section error found, prefixed with the section name.
    pub fn validate(&self) -> Result<(), String> {
        self.discovery
            .validate()
            .map_err(|e| format!("discovery: {e}"))?;
        self.directions
            .validate()
            .map_err(|e| format!("directions: {e}"))?;
        Ok(())
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("BITEMAP")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.discovery.base_url, "http://localhost:3000");
        assert_eq!(config.directions.base_url, "https://maps.googleapis.com");
        assert!(!config.directions.has_api_key());
    }

    #[test]
    fn validate_reports_section() {
        let config = AppConfig {
            discovery: DiscoveryConfig {
                base_url: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.starts_with("discovery:"));
    }

    #[test]
    fn load_from_reads_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[discovery]
base_url = "http://api.example.test"
timeout_secs = 10

[directions]
api_key = "AIzaSyExample"

[telemetry]
debug_logging = false
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.discovery.base_url, "http://api.example.test");
        assert_eq!(config.discovery.timeout_secs, 10);
        assert!(config.directions.has_api_key());
        assert_eq!(config.directions.timeout_secs, 30);
        assert!(!config.telemetry.debug_logging);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[discovery]\ntimeout_secs = 12").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.discovery.base_url, "http://localhost:3000");
        assert_eq!(config.discovery.timeout_secs, 12);
        assert_eq!(config.directions.timeout_secs, 30);
        assert!(config.telemetry.debug_logging);
    }
}
