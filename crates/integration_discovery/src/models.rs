//! Typed models for discovery backend responses
//!
//! The backend wraps every payload in a `success`/`error` envelope; the
//! client unwraps that envelope and hands these models to callers.

use domain::{FavoriteItem, Restaurant};
use secrecy::SecretString;

/// A page of restaurants from search or trending
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Restaurants returned by the backend
    pub restaurants: Vec<Restaurant>,
    /// Result count reported by the backend
    pub count: u32,
}

/// A page of saved favorites
#[derive(Debug, Clone)]
pub struct FavoritePage {
    /// Saved favorites, newest first as the backend returns them
    pub favorites: Vec<FavoriteItem>,
    /// Favorite count reported by the backend
    pub count: u32,
}

/// Acknowledgement for a newly saved favorite
#[derive(Debug, Clone)]
pub struct FavoriteAck {
    /// Identifier assigned to the favorite
    pub favorite_id: String,
    /// Identifier of the restaurant record
    pub restaurant_id: String,
    /// Confirmation message from the backend
    pub message: String,
}

/// Authenticated user identity
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Stable user identifier
    pub id: String,
    /// Email address, absent for guest sessions
    pub email: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Avatar URL
    pub picture: Option<String>,
}

/// An authenticated session with bearer tokens
///
/// Tokens are held as [`SecretString`] so they never appear in debug output.
#[derive(Debug)]
pub struct AuthSession {
    /// Who logged in
    pub user: AuthUser,
    /// Bearer token for authenticated endpoints
    pub access_token: SecretString,
    /// Token used to obtain a fresh access token
    pub refresh_token: Option<SecretString>,
}
