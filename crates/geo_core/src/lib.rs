//! Offline geocoding and route synthesis for Bitemap
//!
//! Resolves free-text Toronto-area addresses to coordinates through a
//! cascade of precision tiers, and builds deterministic preview routes
//! between two coordinates. Everything here is synchronous, stateless,
//! and total: resolution always produces a coordinate, degrading in
//! precision rather than failing.

pub mod models;
pub mod parser;
pub mod resolver;
pub mod route;

mod gazetteer;

pub use models::{AddressComponents, City, Neighborhood, PrecisionTier, Resolution, Route, Street};
pub use parser::parse_components;
pub use resolver::resolve;
pub use route::plan_route;
