//! Tiered address resolution
//!
//! Cascades from known sites through street segments down to
//! neighborhood and city centres. Resolution is total: an address that
//! matches nothing still resolves to downtown Toronto at the lowest
//! precision tier.

use domain::GeoPoint;
use tracing::debug;

use crate::gazetteer;
use crate::models::{PrecisionTier, Resolution};
use crate::parser::parse_components;

/// Resolve a free-text address to a coordinate and precision tier
///
/// Tiers are tried strictly in order: exact site, street segment,
/// neighborhood centre, city centre. Never fails.
#[must_use]
pub fn resolve(address: &str) -> Resolution {
    let normalized = address.trim().to_lowercase();
    let components = parse_components(&normalized);

    if let Some(point) = gazetteer::exact_site(&normalized) {
        debug!(%point, "resolved to known site");
        return Resolution::new(point, PrecisionTier::Exact);
    }

    if let Some(street) = components.street {
        if let Some(point) = gazetteer::street_segment(street, components.street_number_value()) {
            debug!(%point, ?street, "resolved to street segment");
            return Resolution::new(point, PrecisionTier::StreetLevel);
        }
    }

    if let Some(neighborhood) = components.neighborhood {
        if let Some(point) = gazetteer::neighborhood_point(neighborhood) {
            debug!(%point, ?neighborhood, "resolved to neighborhood centre");
            return Resolution::new(point, PrecisionTier::Neighborhood);
        }
    }

    if let Some(city) = components.city {
        if let Some(point) = gazetteer::city_point(city) {
            debug!(%point, ?city, "resolved to city centre");
            return Resolution::new(point, PrecisionTier::CityDefault);
        }
    }

    debug!("no match, using downtown Toronto default");
    Resolution::new(GeoPoint::toronto_downtown(), PrecisionTier::CityDefault)
}
