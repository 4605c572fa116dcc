//! Route adapter - Implements RoutePort using integration_directions

use std::fmt;
use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutePort;
use async_trait::async_trait;
use domain::GeoPoint;
use geo_core::{Route, plan_route};
use integration_directions::{
    DirectionsClient, DirectionsConfig, GoogleDirectionsClient, SyntheticDirectionsClient,
};
use tracing::{instrument, warn};

/// Adapter for route lookups backed by a directions provider
///
/// Provider failures never surface to callers: the synthetic planner takes
/// over so a route preview is always available.
pub struct RouteAdapter {
    client: Arc<dyn DirectionsClient>,
    provider: &'static str,
}

impl fmt::Debug for RouteAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteAdapter")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl RouteAdapter {
    /// Create an adapter backed by the Google Directions API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn google(config: &DirectionsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleDirectionsClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self {
            client: Arc::new(client),
            provider: "google",
        })
    }

    /// Create an adapter that only generates synthetic routes
    #[must_use]
    pub fn synthetic() -> Self {
        Self {
            client: Arc::new(SyntheticDirectionsClient),
            provider: "synthetic",
        }
    }

    /// Create the adapter the configuration calls for
    ///
    /// Without a usable API key the synthetic provider is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the Google client fails to initialize.
    pub fn from_config(config: &DirectionsConfig) -> Result<Self, ApplicationError> {
        if config.has_api_key() {
            Self::google(config)
        } else {
            warn!("Directions API key not configured, using synthetic routes");
            Ok(Self::synthetic())
        }
    }
}

#[async_trait]
impl RoutePort for RouteAdapter {
    #[instrument(skip(self))]
    async fn find_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, ApplicationError> {
        match self.client.fetch_route(origin, destination).await {
            Ok(route) => Ok(route),
            Err(e) => {
                warn!(
                    provider = self.provider,
                    error = %e,
                    "Route provider failed, using synthetic route"
                );
                Ok(plan_route(origin, destination))
            }
        }
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
