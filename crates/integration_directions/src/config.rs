//! Directions provider configuration
//!
//! The Google Directions client only activates when a real API key is
//! configured. A missing, empty, or placeholder key selects the offline
//! synthetic route builder instead.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Placeholder value shipped in sample configs. Treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GOOGLE_MAPS_API_KEY_HERE";

/// Configuration for the directions provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL of the Google Maps API host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Google Directions API key (prefer env var BITEMAP_DIRECTIONS__API_KEY)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            api_key: Some(SecretString::from("test-key")),
            ..Default::default()
        }
    }

    /// Whether a usable API key is configured
    ///
    /// Empty and placeholder keys count as absent.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|key| {
            let exposed = key.expose_secret();
            !exposed.trim().is_empty() && exposed != PLACEHOLDER_API_KEY
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
