//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod route_adapter;

pub use route_adapter::RouteAdapter;
