//! Application layer - Use cases and orchestration
//!
//! Contains application-level logic, navigation use cases, and port
//! definitions. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
