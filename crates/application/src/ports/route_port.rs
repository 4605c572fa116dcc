//! Driving route port
//!
//! Defines the interface for fetching a driving route between two coordinate
//! points. Adapters either call a remote directions API or build a synthetic
//! preview locally.

use async_trait::async_trait;
use domain::GeoPoint;
use geo_core::Route;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving-route lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutePort: Send + Sync {
    /// Fetch a driving route from origin to destination
    async fn find_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, ApplicationError>;

    /// Check if the route service is reachable
    async fn is_available(&self) -> bool;
}
