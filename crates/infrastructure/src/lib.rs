//! Infrastructure layer - Configuration and external system adapters
//!
//! Implements ports defined in the application layer and provides the
//! ambient services the binaries need: configuration loading and logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::RouteAdapter;
pub use config::AppConfig;
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
