//! Google Directions API client for Bitemap
//!
//! Fetches driving routes between two coordinates and decodes them into
//! [`geo_core::Route`] values for preview rendering. Deployments without a
//! Directions API key fall back to a synthetic route generated locally, so
//! callers see the same shape of data either way.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration
//! crates. [`DirectionsClient`] defines the interface, implemented by
//! [`GoogleDirectionsClient`] for the real API and
//! [`SyntheticDirectionsClient`] for offline use. [`DirectionsConfig`] decides
//! which one a deployment gets via [`DirectionsConfig::has_api_key`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::GeoPoint;
//! use integration_directions::{DirectionsClient, DirectionsConfig, SyntheticDirectionsClient};
//!
//! let origin = GeoPoint::new(43.6426, -79.3871)?;
//! let destination = GeoPoint::new(43.7731, -79.2578)?;
//!
//! let route = SyntheticDirectionsClient.fetch_route(origin, destination).await?;
//! println!("{} in {}", route.distance_label(), route.duration_label());
//! ```

mod client;
mod config;
mod error;

pub use client::{DirectionsClient, GoogleDirectionsClient, SyntheticDirectionsClient};
pub use config::{DirectionsConfig, PLACEHOLDER_API_KEY};
pub use error::DirectionsError;
