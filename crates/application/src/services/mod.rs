//! Application services - Use case implementations

mod map_service;
mod navigation_service;

pub use map_service::MapService;
pub use navigation_service::{Approach, NavigationError, NavigationService};
