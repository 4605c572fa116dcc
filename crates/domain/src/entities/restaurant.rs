//! Restaurant entity
//!
//! Represents a restaurant record as served by the discovery backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoPoint;

/// Minimum rating the backend is expected to serve
const MIN_RATING: f64 = 3.0;
/// Maximum rating the backend is expected to serve
const MAX_RATING: f64 = 5.0;
/// Minimum description length for a well-formed record
const MIN_DESCRIPTION_LEN: usize = 50;

/// A restaurant as returned by the discovery backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    /// Display name
    pub name: String,
    /// Cuisine category (e.g. "italian", "japanese")
    #[serde(rename = "cuisine_type")]
    pub cuisine: String,
    /// Average rating, expected within 3.0 to 5.0
    pub rating: f64,
    /// Street address as free text
    pub address: String,
    /// Contact phone number
    pub phone: String,
    /// Long-form description
    pub description: String,
    /// Opening hours keyed by lowercase weekday name
    #[serde(default)]
    pub hours: HashMap<String, String>,
    /// Latitude when the backend has geocoded the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude when the backend has geocoded the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Restaurant {
    /// Create a restaurant without backend-provided coordinates
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        rating: f64,
        address: impl Into<String>,
        phone: impl Into<String>,
        description: impl Into<String>,
        hours: HashMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            rating,
            address: address.into(),
            phone: phone.into(),
            description: description.into(),
            hours,
            latitude: None,
            longitude: None,
        }
    }

    /// Validate the record against the backend data contract
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` naming the first field
    /// that fails.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if self.cuisine.trim().is_empty() {
            return Err(DomainError::validation("cuisine_type must not be empty"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(DomainError::validation(format!(
                "rating {} outside {MIN_RATING} to {MAX_RATING}",
                self.rating
            )));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("address must not be empty"));
        }
        if self.phone.trim().is_empty() {
            return Err(DomainError::validation("phone must not be empty"));
        }
        if self.description.len() < MIN_DESCRIPTION_LEN {
            return Err(DomainError::validation(format!(
                "description shorter than {MIN_DESCRIPTION_LEN} characters"
            )));
        }
        if self.hours.is_empty() {
            return Err(DomainError::validation("hours must not be empty"));
        }
        Ok(())
    }

    /// Check validity without caring which field failed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Backend-provided position, when present and in range
    ///
    /// Out-of-range coordinates are treated as absent so callers fall
    /// back to geocoding the address.
    #[must_use]
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).ok(),
            _ => None,
        }
    }

    /// Formatted opening hours for display
    ///
    /// Prefers Monday, falls back to any listed day.
    #[must_use]
    pub fn today_hours(&self) -> String {
        let hours = self
            .hours
            .get("monday")
            .or_else(|| self.hours.values().next());
        hours.map_or_else(
            || "Hours not available".to_string(),
            |h| format!("Open today: {h}"),
        )
    }
}
