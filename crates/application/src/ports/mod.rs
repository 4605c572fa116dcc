//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the presentation and integration layers
//! implement these ports.

mod launcher_port;
mod route_port;

pub use launcher_port::{GOOGLE_MAPS_APP, HandlerConstraint, LaunchError, LaunchRequest, LauncherPort};
#[cfg(test)]
pub use launcher_port::MockLauncherPort;
pub use route_port::RoutePort;
#[cfg(test)]
pub use route_port::MockRoutePort;
