//! Restaurant discovery backend client for Bitemap
//!
//! Talks to the Foodie discovery server over HTTP: restaurant search and
//! trending lists, per-user favorites, and the authentication endpoints that
//! issue the bearer tokens favorites require.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration
//! crates. [`DiscoveryClient`] defines the interface, implemented by
//! [`HttpDiscoveryClient`]. Responses arrive in a `success`/`error` envelope
//! which the client unwraps into typed models or a [`DiscoveryError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_discovery::{DiscoveryClient, DiscoveryConfig, HttpDiscoveryClient};
//!
//! let config = DiscoveryConfig::default();
//! let client = HttpDiscoveryClient::new(&config)?;
//!
//! let page = client.search_restaurants("sushi", Some("toronto")).await?;
//! for restaurant in &page.restaurants {
//!     println!("{} ({})", restaurant.name, restaurant.rating);
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DiscoveryClient, HttpDiscoveryClient};
pub use config::DiscoveryConfig;
pub use error::DiscoveryError;
pub use models::{AuthSession, AuthUser, FavoriteAck, FavoritePage, SearchPage};
