//! Logging initialization
//!
//! Console tracing setup shared by the binaries. `RUST_LOG` always wins;
//! otherwise the configured filter applies, with a plain `debug`/`info`
//! fallback controlled by the debug logging toggle.

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Verbose logging toggle, used when no filter is configured
    #[serde(default = "default_debug_logging")]
    pub debug_logging: bool,

    /// Log level filter (e.g. "info", "bitemap=debug,reqwest=warn")
    #[serde(default)]
    pub log_filter: Option<String>,
}

const fn default_debug_logging() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            debug_logging: default_debug_logging(),
            log_filter: None,
        }
    }
}

impl TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[must_use]
    pub fn effective_filter(&self) -> String {
        self.log_filter.clone().unwrap_or_else(|| {
            if self.debug_logging {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        })
    }
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize the tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Initialize console logging with the given configuration
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(filter = %config.effective_filter(), "Logging initialized");
    Ok(())
}
