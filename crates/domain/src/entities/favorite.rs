//! Favorite list item entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Restaurant;
use crate::errors::DomainError;

/// A saved restaurant from the favorites list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Backend-assigned identifier
    pub id: String,
    /// The saved restaurant record
    pub restaurant: Restaurant,
    /// When the favorite was created
    pub created_at: DateTime<Utc>,
}

impl FavoriteItem {
    /// Create a favorite item
    #[must_use]
    pub fn new(id: impl Into<String>, restaurant: Restaurant, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            restaurant,
            created_at,
        }
    }

    /// Validate the item and its embedded restaurant
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` when the id is blank or
    /// the restaurant record fails its own validation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("favorite id must not be empty"));
        }
        self.restaurant.validate()
    }
}
