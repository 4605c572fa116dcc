//! HTTP client for the Foodie discovery backend
//!
//! Covers restaurant search and trending, per-user favorites, and the auth
//! endpoints that issue bearer tokens (Google sign-in, guest sessions, token
//! refresh). Every payload arrives in a `success`/`error` envelope which the
//! parse helpers unwrap into typed models.

use std::time::Duration;

use async_trait::async_trait;
use domain::{FavoriteItem, Restaurant};
use reqwest::Client;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::models::{AuthSession, AuthUser, FavoriteAck, FavoritePage, SearchPage};

/// Trait for discovery backend clients
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// Search restaurants by query, optionally filtered by location
    async fn search_restaurants(
        &self,
        query: &str,
        location: Option<&str>,
    ) -> Result<SearchPage, DiscoveryError>;

    /// Fetch the current trending restaurants
    async fn trending_restaurants(&self) -> Result<SearchPage, DiscoveryError>;

    /// List the authenticated user's favorites
    async fn favorites(&self, access_token: &str) -> Result<FavoritePage, DiscoveryError>;

    /// Save a restaurant to the authenticated user's favorites
    async fn add_favorite(
        &self,
        access_token: &str,
        restaurant: &Restaurant,
    ) -> Result<FavoriteAck, DiscoveryError>;

    /// Exchange a Google ID token for a session
    async fn login_with_google(&self, id_token: &str) -> Result<AuthSession, DiscoveryError>;

    /// Start an anonymous session keyed to a device identifier
    async fn login_as_guest(&self, device_id: &str) -> Result<AuthSession, DiscoveryError>;

    /// Exchange a refresh token for a fresh session
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, DiscoveryError>;

    /// Check if the discovery backend is reachable
    async fn is_healthy(&self) -> bool;
}

/// HTTP-based discovery client
#[derive(Debug)]
pub struct HttpDiscoveryClient {
    client: Client,
    config: DiscoveryConfig,
}

impl HttpDiscoveryClient {
    /// Create a new discovery client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DiscoveryConfig) -> Result<Self, DiscoveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Bitemap/1.0")
            .build()
            .map_err(|e| DiscoveryError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn send_error(&self, e: &reqwest::Error) -> DiscoveryError {
        if e.is_timeout() {
            DiscoveryError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            DiscoveryError::ConnectionFailed(e.to_string())
        }
    }

    /// Map a non-success status to an error, preferring the backend envelope
    fn error_from_failure(status: reqwest::StatusCode, body: &str) -> DiscoveryError {
        // Error statuses still carry the envelope when the backend produced them.
        if let Ok(raw) = serde_json::from_str::<RawEnvelope>(body) {
            if let Some(error) = raw.error {
                return DiscoveryError::Rejected {
                    error,
                    message: raw.message.unwrap_or_default(),
                };
            }
        }
        DiscoveryError::RequestFailed(format!("HTTP {status}"))
    }

    /// Parse a search or trending response
    fn parse_search_response(body: &str) -> Result<SearchPage, DiscoveryError> {
        let raw: RawSearchResponse =
            serde_json::from_str(body).map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !raw.success {
            return Err(envelope_rejection(raw.error, raw.message));
        }

        let restaurants = raw.restaurants.ok_or_else(invalid_structure)?;

        Ok(SearchPage {
            count: raw.count,
            restaurants,
        })
    }

    /// Parse a favorites list response
    fn parse_favorites_response(body: &str) -> Result<FavoritePage, DiscoveryError> {
        let raw: RawFavoritesResponse =
            serde_json::from_str(body).map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !raw.success {
            return Err(envelope_rejection(raw.error, raw.message));
        }

        let favorites = raw.favorites.ok_or_else(invalid_structure)?;

        Ok(FavoritePage {
            count: raw.count,
            favorites,
        })
    }

    /// Parse the acknowledgement for a saved favorite
    fn parse_favorite_ack(body: &str) -> Result<FavoriteAck, DiscoveryError> {
        let raw: RawFavoriteResponse =
            serde_json::from_str(body).map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !raw.success {
            return Err(envelope_rejection(raw.error, raw.message));
        }

        match (raw.favorite_id, raw.restaurant_id, raw.message) {
            (Some(favorite_id), Some(restaurant_id), Some(message))
                if !favorite_id.trim().is_empty()
                    && !restaurant_id.trim().is_empty()
                    && !message.trim().is_empty() =>
            {
                Ok(FavoriteAck {
                    favorite_id,
                    restaurant_id,
                    message,
                })
            },
            _ => Err(invalid_structure()),
        }
    }

    /// Parse an auth response into a session
    ///
    /// Tokens arrive either flat on the response or nested in a `session`
    /// object; both shapes are accepted, with the flat form winning.
    fn parse_auth_response(body: &str) -> Result<AuthSession, DiscoveryError> {
        let raw: RawAuthResponse =
            serde_json::from_str(body).map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !raw.success {
            return Err(envelope_rejection(raw.error, raw.message));
        }

        let user = raw.user.map(Self::convert_user).ok_or_else(invalid_structure)?;
        let session = raw.session.unwrap_or_default();
        let access_token = raw
            .access_token
            .or(session.access_token)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(invalid_structure)?;
        let refresh_token = raw.refresh_token.or(session.refresh_token);

        Ok(AuthSession {
            user,
            access_token: SecretString::from(access_token),
            refresh_token: refresh_token.map(SecretString::from),
        })
    }

    /// Convert a raw user, falling back to profile metadata for the
    /// display name and avatar
    fn convert_user(raw: RawUser) -> AuthUser {
        let meta = raw.user_metadata.unwrap_or_default();
        AuthUser {
            id: raw.id.unwrap_or_default(),
            email: raw.email,
            name: raw.name.or(meta.full_name),
            picture: raw.picture.or(meta.picture).or(meta.avatar_url),
        }
    }
}

#[async_trait]
impl DiscoveryClient for HttpDiscoveryClient {
    #[instrument(skip(self))]
    async fn search_restaurants(
        &self,
        query: &str,
        location: Option<&str>,
    ) -> Result<SearchPage, DiscoveryError> {
        if query.trim().is_empty() {
            return Err(DiscoveryError::InvalidRequest(
                "Query parameter is required".to_string(),
            ));
        }

        let url = format!("{}/api/restaurants/search", self.config.base_url);

        let mut params: Vec<(&str, String)> = vec![("q", query.trim().to_string())];
        if let Some(location) = location.map(str::trim).filter(|l| !l.is_empty()) {
            params.push(("location", location.to_string()));
        }

        debug!(?url, "Searching restaurants");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_failure(status, &body));
        }

        let page = Self::parse_search_response(&body)?;

        if page.restaurants.is_empty() {
            warn!("No restaurants found");
        }

        debug!(count = page.restaurants.len(), "Restaurants found");
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn trending_restaurants(&self) -> Result<SearchPage, DiscoveryError> {
        let url = format!("{}/api/restaurants/trending", self.config.base_url);

        debug!(?url, "Fetching trending restaurants");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_failure(status, &body));
        }

        Self::parse_search_response(&body)
    }

    #[instrument(skip(self, access_token))]
    async fn favorites(&self, access_token: &str) -> Result<FavoritePage, DiscoveryError> {
        if access_token.trim().is_empty() {
            return Err(DiscoveryError::AuthenticationRequired);
        }

        let url = format!("{}/api/favorites", self.config.base_url);

        debug!(?url, "Fetching favorites");

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_failure(status, &body));
        }

        Self::parse_favorites_response(&body)
    }

    #[instrument(skip(self, access_token, restaurant), fields(restaurant = %restaurant.name))]
    async fn add_favorite(
        &self,
        access_token: &str,
        restaurant: &Restaurant,
    ) -> Result<FavoriteAck, DiscoveryError> {
        if restaurant.name.trim().is_empty() {
            return Err(DiscoveryError::InvalidRequest(
                "Invalid restaurant data".to_string(),
            ));
        }
        if access_token.trim().is_empty() {
            return Err(DiscoveryError::AuthenticationRequired);
        }

        let url = format!("{}/api/favorites", self.config.base_url);

        debug!(?url, "Saving favorite");

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .json(&RawFavoriteRequest {
                restaurant_data: restaurant,
            })
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_failure(status, &body));
        }

        Self::parse_favorite_ack(&body)
    }

    #[instrument(skip(self, id_token))]
    async fn login_with_google(&self, id_token: &str) -> Result<AuthSession, DiscoveryError> {
        if id_token.trim().is_empty() {
            return Err(DiscoveryError::InvalidRequest(
                "Google ID token is required".to_string(),
            ));
        }

        let url = format!("{}/api/auth/google", self.config.base_url);

        debug!(?url, "Authenticating with Google");

        let response = self
            .client
            .post(&url)
            .json(&RawGoogleAuthRequest { id_token })
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_failure(status, &body));
        }

        Self::parse_auth_response(&body)
    }

    #[instrument(skip(self, device_id))]
    async fn login_as_guest(&self, device_id: &str) -> Result<AuthSession, DiscoveryError> {
        let url = format!("{}/api/auth/guest", self.config.base_url);

        debug!(?url, "Authenticating as guest");

        let response = self
            .client
            .post(&url)
            .json(&RawGuestAuthRequest { device_id })
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_failure(status, &body));
        }

        Self::parse_auth_response(&body)
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, DiscoveryError> {
        if refresh_token.trim().is_empty() {
            return Err(DiscoveryError::AuthenticationRequired);
        }

        let url = format!("{}/api/auth/refresh", self.config.base_url);

        debug!(?url, "Refreshing session");

        let response = self
            .client
            .post(&url)
            .json(&RawRefreshRequest { refresh_token })
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_failure(status, &body));
        }

        Self::parse_auth_response(&body)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/health", self.config.base_url);
        self.client
            .get(&url)
            .send()
            .await
            .is_ok_and(|response| response.status().is_success())
    }
}

/// Envelope rejection, or an invalid-structure error when the backend
/// reported failure without saying why
fn envelope_rejection(error: Option<String>, message: Option<String>) -> DiscoveryError {
    error.map_or_else(invalid_structure, |error| DiscoveryError::Rejected {
        error,
        message: message.unwrap_or_default(),
    })
}

fn invalid_structure() -> DiscoveryError {
    DiscoveryError::ParseError("Invalid response structure".to_string())
}

// --- Raw wire types ---

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    success: bool,
    restaurants: Option<Vec<Restaurant>>,
    #[serde(default)]
    count: u32,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFavoritesResponse {
    #[serde(default)]
    success: bool,
    favorites: Option<Vec<FavoriteItem>>,
    #[serde(default)]
    count: u32,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFavoriteResponse {
    #[serde(default)]
    success: bool,
    favorite_id: Option<String>,
    restaurant_id: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuthResponse {
    #[serde(default)]
    success: bool,
    user: Option<RawUser>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    session: Option<RawSession>,
    error: Option<String>,
    message: Option<String>,
}

// Session tokens use snake_case on the wire, unlike the flat fields.
#[derive(Debug, Default, Deserialize)]
struct RawSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    id: Option<String>,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
    user_metadata: Option<RawUserMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUserMetadata {
    full_name: Option<String>,
    picture: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct RawFavoriteRequest<'a> {
    restaurant_data: &'a Restaurant,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawGoogleAuthRequest<'a> {
    id_token: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawGuestAuthRequest<'a> {
    device_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawRefreshRequest<'a> {
    refresh_token: &'a str,
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    const SEARCH_JSON: &str = r#"{
        "success": true,
        "count": 2,
        "restaurants": [
            {
                "name": "Sushi Time",
                "cuisine_type": "japanese",
                "rating": 4.5,
                "address": "500 Yonge St, Toronto",
                "phone": "416-555-0100",
                "description": "Fresh rolls and sashimi served until late every night.",
                "hours": { "monday": "11:00 AM - 10:00 PM" },
                "latitude": 43.66,
                "longitude": -79.3844
            },
            {
                "name": "Pasta Corner",
                "cuisine_type": "italian",
                "rating": 4.1,
                "address": "200 Queen St W, Toronto",
                "phone": "416-555-0101",
                "description": "Hand-made pasta with a rotating seasonal menu downtown.",
                "hours": {}
            }
        ]
    }"#;

    #[test]
    fn test_parse_search_response() {
        let page = HttpDiscoveryClient::parse_search_response(SEARCH_JSON).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.restaurants.len(), 2);
        assert_eq!(page.restaurants[0].name, "Sushi Time");
        assert_eq!(page.restaurants[0].cuisine, "japanese");
        assert!(page.restaurants[0].position().is_some());
        assert!(page.restaurants[1].position().is_none());
    }

    #[test]
    fn test_parse_search_rejection() {
        let json =
            r#"{ "success": false, "error": "Search failed", "message": "Database unavailable" }"#;
        let err = HttpDiscoveryClient::parse_search_response(json).unwrap_err();
        assert_eq!(err.to_string(), "Search failed: Database unavailable");
    }

    #[test]
    fn test_parse_search_missing_restaurants() {
        let json = r#"{ "success": true, "count": 0 }"#;
        let err = HttpDiscoveryClient::parse_search_response(json).unwrap_err();
        assert!(matches!(err, DiscoveryError::ParseError(_)));
    }

    #[test]
    fn test_parse_favorites_response() {
        let json = r#"{
            "success": true,
            "count": 1,
            "favorites": [{
                "id": "fav-1",
                "restaurant": {
                    "name": "Sushi Time",
                    "cuisine_type": "japanese",
                    "rating": 4.5,
                    "address": "500 Yonge St, Toronto",
                    "phone": "416-555-0100",
                    "description": "Fresh rolls and sashimi served until late every night.",
                    "hours": {}
                },
                "created_at": "2026-03-01T18:30:00Z"
            }]
        }"#;

        let page = HttpDiscoveryClient::parse_favorites_response(json).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.favorites[0].id, "fav-1");
        assert_eq!(page.favorites[0].restaurant.name, "Sushi Time");
    }

    #[test]
    fn test_parse_favorite_ack() {
        let json = r#"{
            "success": true,
            "message": "Restaurant added to favorites",
            "favorite_id": "fav-9",
            "restaurant_id": "rest-4"
        }"#;

        let ack = HttpDiscoveryClient::parse_favorite_ack(json).unwrap();
        assert_eq!(ack.favorite_id, "fav-9");
        assert_eq!(ack.restaurant_id, "rest-4");
        assert_eq!(ack.message, "Restaurant added to favorites");
    }

    #[test]
    fn test_parse_favorite_ack_missing_ids() {
        let json = r#"{ "success": true, "message": "ok" }"#;
        let err = HttpDiscoveryClient::parse_favorite_ack(json).unwrap_err();
        assert!(matches!(err, DiscoveryError::ParseError(_)));
    }

    #[test]
    fn test_parse_auth_flat_tokens() {
        let json = r#"{
            "success": true,
            "user": { "id": "u1", "email": "ada@example.com", "name": "Ada" },
            "accessToken": "acc-1",
            "refreshToken": "ref-1"
        }"#;

        let session = HttpDiscoveryClient::parse_auth_response(json).unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(session.access_token.expose_secret(), "acc-1");
        assert_eq!(session.refresh_token.unwrap().expose_secret(), "ref-1");
    }

    #[test]
    fn test_parse_auth_session_tokens() {
        let json = r#"{
            "success": true,
            "user": {
                "id": "u2",
                "user_metadata": { "full_name": "Guest User", "avatar_url": "https://example.com/a.png" }
            },
            "session": {
                "access_token": "acc-2",
                "refresh_token": "ref-2",
                "token_type": "bearer",
                "expires_in": 3600
            }
        }"#;

        let session = HttpDiscoveryClient::parse_auth_response(json).unwrap();
        assert_eq!(session.user.name.as_deref(), Some("Guest User"));
        assert_eq!(session.user.picture.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(session.access_token.expose_secret(), "acc-2");
        assert_eq!(session.refresh_token.unwrap().expose_secret(), "ref-2");
    }

    #[test]
    fn test_parse_auth_flat_tokens_win_over_session() {
        let json = r#"{
            "success": true,
            "user": { "id": "u3" },
            "accessToken": "flat",
            "session": { "access_token": "nested" }
        }"#;

        let session = HttpDiscoveryClient::parse_auth_response(json).unwrap();
        assert_eq!(session.access_token.expose_secret(), "flat");
    }

    #[test]
    fn test_parse_auth_missing_token() {
        let json = r#"{ "success": true, "user": { "id": "u4" } }"#;
        let err = HttpDiscoveryClient::parse_auth_response(json).unwrap_err();
        assert!(matches!(err, DiscoveryError::ParseError(_)));
    }

    #[test]
    fn test_parse_auth_rejection() {
        let json = r#"{ "success": false, "error": "Invalid token", "message": "Signature check failed" }"#;
        let err = HttpDiscoveryClient::parse_auth_response(json).unwrap_err();
        assert_eq!(err.to_string(), "Invalid token: Signature check failed");
    }

    #[test]
    fn test_error_from_failure_prefers_envelope() {
        let body = r#"{ "success": false, "error": "Unauthorized", "message": "Token expired" }"#;
        let err =
            HttpDiscoveryClient::error_from_failure(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.to_string(), "Unauthorized: Token expired");
    }

    #[test]
    fn test_error_from_failure_plain_http() {
        let err = HttpDiscoveryClient::error_from_failure(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "oops",
        );
        assert!(matches!(err, DiscoveryError::RequestFailed(_)));
        assert!(err.to_string().contains("500"));
    }
}
