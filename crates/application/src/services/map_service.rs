//! Map screen orchestration
//!
//! Resolves where a restaurant sits on the map and fetches a driving route
//! preview to it. Stored coordinates take precedence over offline geocoding.

use std::{fmt, sync::Arc};

use domain::{GeoPoint, Restaurant};
use geo_core::{PrecisionTier, Resolution, Route, resolve};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::RoutePort};

/// Service backing the map and restaurant detail screens
pub struct MapService {
    route: Arc<dyn RoutePort>,
}

impl fmt::Debug for MapService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapService").finish_non_exhaustive()
    }
}

impl MapService {
    /// Create a new map service
    pub fn new(route: Arc<dyn RoutePort>) -> Self {
        Self { route }
    }

    /// Place a restaurant on the map
    ///
    /// Stored coordinates are trusted as exact. Without them the address is
    /// resolved offline, degrading through street, neighborhood, and city
    /// precision before settling on the downtown default.
    #[must_use]
    pub fn locate_restaurant(restaurant: &Restaurant) -> Resolution {
        match restaurant.position() {
            Some(point) => Resolution::new(point, PrecisionTier::Exact),
            None => resolve(&restaurant.address),
        }
    }

    /// Resolve a free-form address to map coordinates
    #[must_use]
    pub fn locate_address(address: &str) -> Resolution {
        resolve(address)
    }

    /// Fetch a driving route between two points
    #[instrument(skip(self))]
    pub async fn route_preview(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, ApplicationError> {
        let route = self.route.find_route(origin, destination).await?;
        debug!(
            distance = %route.distance_label(),
            duration = %route.duration_label(),
            "Route fetched"
        );
        Ok(route)
    }

    /// Route from the user's position to a restaurant
    ///
    /// Returns the resolution used for the destination along with the route,
    /// so callers can surface degraded precision.
    #[instrument(skip(self, restaurant), fields(restaurant = %restaurant.name))]
    pub async fn route_to_restaurant(
        &self,
        origin: GeoPoint,
        restaurant: &Restaurant,
    ) -> Result<(Resolution, Route), ApplicationError> {
        let resolution = Self::locate_restaurant(restaurant);
        let route = self.route.find_route(origin, resolution.point).await?;
        Ok((resolution, route))
    }
}
