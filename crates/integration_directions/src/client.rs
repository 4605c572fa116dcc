//! Google Directions API client
//!
//! Fetches driving routes from the [Directions API](https://developers.google.com/maps/documentation/directions)
//! and decodes them into [`Route`] values. When no API key is configured the
//! [`SyntheticDirectionsClient`] stands in with a locally generated route so
//! the rest of the application behaves identically.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoPoint;
use geo_core::{Route, plan_route};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;

/// Trait for route providers
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Fetch a driving route between two coordinates
    async fn fetch_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, DirectionsError>;

    /// Check if the provider is reachable
    async fn is_healthy(&self) -> bool;
}

/// Client for the Google Directions API
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
}

impl GoogleDirectionsClient {
    /// Create a new Directions API client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Bitemap/1.0")
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn send_error(&self, e: &reqwest::Error) -> DirectionsError {
        if e.is_timeout() {
            DirectionsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            DirectionsError::ConnectionFailed(e.to_string())
        }
    }

    /// Parse a Directions API response body into a route
    fn parse_directions_response(body: &str) -> Result<Route, DirectionsError> {
        let raw: RawDirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        match raw.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" | "NOT_FOUND" => return Err(DirectionsError::NoRouteFound),
            status => {
                return Err(DirectionsError::Api {
                    status: status.to_string(),
                    message: raw.error_message.unwrap_or_default(),
                });
            }
        }

        let route = raw.routes.first().ok_or(DirectionsError::NoRouteFound)?;
        let leg = route
            .legs
            .first()
            .ok_or_else(|| DirectionsError::ParseError("route has no legs".to_string()))?;

        let points = Self::leg_points(leg)?;
        let distance_km = leg.distance.value / 1000.0;
        let duration_minutes =
            u32::try_from(leg.duration.value.div_ceil(60)).unwrap_or(u32::MAX);

        Ok(Route {
            points,
            distance_km,
            duration_minutes,
        })
    }

    /// Extract the waypoint sequence of a leg
    ///
    /// Each step contributes its start, and the final step its end. A leg
    /// without steps still yields its own endpoints.
    fn leg_points(leg: &RawLeg) -> Result<Vec<GeoPoint>, DirectionsError> {
        let mut raw_points: Vec<&RawLatLng> = Vec::with_capacity(leg.steps.len() + 1);

        if leg.steps.is_empty() {
            raw_points.push(&leg.start_location);
            raw_points.push(&leg.end_location);
        } else {
            for step in &leg.steps {
                raw_points.push(&step.start_location);
            }
            if let Some(last) = leg.steps.last() {
                raw_points.push(&last.end_location);
            }
        }

        raw_points
            .into_iter()
            .map(|p| {
                GeoPoint::new(p.lat, p.lng)
                    .map_err(|e| DirectionsError::ParseError(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self))]
    async fn fetch_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, DirectionsError> {
        let url = format!("{}/maps/api/directions/json", self.config.base_url);
        let origin_param = format!("{},{}", origin.latitude(), origin.longitude());
        let destination_param = format!("{},{}", destination.latitude(), destination.longitude());

        // The URL carries the API key, so only the coordinates are logged.
        debug!(%origin_param, %destination_param, "Requesting route");

        let key = self
            .config
            .api_key
            .as_ref()
            .map_or("", ExposeSecret::expose_secret);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("origin", origin_param.as_str()),
                ("destination", destination_param.as_str()),
                ("mode", "driving"),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, "Directions API request unsuccessful");
            return Err(DirectionsError::RequestFailed(status.as_u16().to_string()));
        }

        let route = Self::parse_directions_response(&body)?;

        debug!(
            points = route.points.len(),
            distance = %route.distance_label(),
            duration = %route.duration_label(),
            "Route received"
        );
        Ok(route)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/maps/api/directions/json", self.config.base_url);
        self.client.get(&url).send().await.is_ok()
    }
}

/// Offline route provider
///
/// Generates a plausible curved route locally, matching what the app shows
/// when no Directions API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticDirectionsClient;

#[async_trait]
impl DirectionsClient for SyntheticDirectionsClient {
    #[instrument(skip(self))]
    async fn fetch_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, DirectionsError> {
        let route = plan_route(origin, destination);
        debug!(
            points = route.points.len(),
            distance = %route.distance_label(),
            duration = %route.duration_label(),
            "Synthetic route generated"
        );
        Ok(route)
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawDirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<RawRoute>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    distance: RawDistance,
    duration: RawDuration,
    start_location: RawLatLng,
    end_location: RawLatLng,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    start_location: RawLatLng,
    end_location: RawLatLng,
}

#[derive(Debug, Deserialize)]
struct RawDistance {
    /// Meters
    value: f64,
}

#[derive(Debug, Deserialize)]
struct RawDuration {
    /// Seconds
    value: u64,
}

#[derive(Debug, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}
