//! Data types for address resolution and route planning

use std::fmt;

use domain::GeoPoint;
use serde::{Deserialize, Serialize};

/// Streets with dedicated handling in the resolver
///
/// Declaration order is the matching priority: the first street whose
/// fragment appears in an address wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    Harbord,
    Midland,
    King,
    Queen,
    Yonge,
    Bloor,
    Dundas,
    College,
    Spadina,
    Augusta,
    Baldwin,
    Ossington,
    Bathurst,
    Church,
    Bay,
    University,
}

impl Street {
    /// All known streets in matching priority order
    pub const ALL: [Self; 16] = [
        Self::Harbord,
        Self::Midland,
        Self::King,
        Self::Queen,
        Self::Yonge,
        Self::Bloor,
        Self::Dundas,
        Self::College,
        Self::Spadina,
        Self::Augusta,
        Self::Baldwin,
        Self::Ossington,
        Self::Bathurst,
        Self::Church,
        Self::Bay,
        Self::University,
    ];

    /// Fragment identifying this street in a lowercased address
    ///
    /// The short suffix also covers the long form: "harbord st" matches
    /// inside "harbord street".
    #[must_use]
    pub const fn matching_fragment(self) -> &'static str {
        match self {
            Self::Harbord => "harbord st",
            Self::Midland => "midland ave",
            Self::King => "king st",
            Self::Queen => "queen st",
            Self::Yonge => "yonge st",
            Self::Bloor => "bloor st",
            Self::Dundas => "dundas st",
            Self::College => "college st",
            Self::Spadina => "spadina ave",
            Self::Augusta => "augusta ave",
            Self::Baldwin => "baldwin st",
            Self::Ossington => "ossington ave",
            Self::Bathurst => "bathurst st",
            Self::Church => "church st",
            Self::Bay => "bay st",
            Self::University => "university ave",
        }
    }
}

/// Cities recognized by the resolver
///
/// Declaration order is the matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Toronto,
    Mississauga,
    Markham,
    RichmondHill,
    Vaughan,
    Brampton,
}

impl City {
    /// All known cities in matching priority order
    pub const ALL: [Self; 6] = [
        Self::Toronto,
        Self::Mississauga,
        Self::Markham,
        Self::RichmondHill,
        Self::Vaughan,
        Self::Brampton,
    ];

    /// Fragment identifying this city in a lowercased address
    #[must_use]
    pub const fn matching_fragment(self) -> &'static str {
        match self {
            Self::Toronto => "toronto",
            Self::Mississauga => "mississauga",
            Self::Markham => "markham",
            Self::RichmondHill => "richmond hill",
            Self::Vaughan => "vaughan",
            Self::Brampton => "brampton",
        }
    }
}

/// Toronto neighborhoods recognized by the resolver
///
/// Only detected for addresses that also mention Toronto. Declaration
/// order is the matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    Scarborough,
    NorthYork,
    Etobicoke,
    Downtown,
    Kensington,
    Chinatown,
    LittleItaly,
}

impl Neighborhood {
    /// All known neighborhoods in matching priority order
    pub const ALL: [Self; 7] = [
        Self::Scarborough,
        Self::NorthYork,
        Self::Etobicoke,
        Self::Downtown,
        Self::Kensington,
        Self::Chinatown,
        Self::LittleItaly,
    ];

    /// Fragment identifying this neighborhood in a lowercased address
    #[must_use]
    pub const fn matching_fragment(self) -> &'static str {
        match self {
            Self::Scarborough => "scarborough",
            Self::NorthYork => "north york",
            Self::Etobicoke => "etobicoke",
            Self::Downtown => "downtown",
            Self::Kensington => "kensington",
            Self::Chinatown => "chinatown",
            Self::LittleItaly => "little italy",
        }
    }
}

/// Components parsed out of a free-text address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    /// Leading street number; for ranges like "100-200" the first number
    pub street_number: Option<String>,
    /// Recognized street, if any
    pub street: Option<Street>,
    /// Recognized city, if any
    pub city: Option<City>,
    /// Recognized Toronto neighborhood, if any
    pub neighborhood: Option<Neighborhood>,
    /// Recognized forward sortation area (first three postal characters)
    pub postal_code: Option<String>,
}

impl AddressComponents {
    /// The street number as an integer, zero when missing or unparseable
    #[must_use]
    pub fn street_number_value(&self) -> u32 {
        self.street_number
            .as_deref()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }
}

/// How precisely an address was resolved
///
/// Variants are ordered from most to least precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionTier {
    /// A known site matched the address text
    Exact,
    /// Positioned within a block range along a known street
    StreetLevel,
    /// Centre of a recognized neighborhood
    Neighborhood,
    /// City centre, or the downtown Toronto default
    CityDefault,
}

impl fmt::Display for PrecisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::StreetLevel => "street-level",
            Self::Neighborhood => "neighborhood",
            Self::CityDefault => "city-default",
        };
        write!(f, "{label}")
    }
}

/// A resolved coordinate together with the precision achieved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// The resolved coordinate
    pub point: GeoPoint,
    /// Precision tier the resolver reached
    pub tier: PrecisionTier,
}

impl Resolution {
    /// Create a resolution
    #[must_use]
    pub const fn new(point: GeoPoint, tier: PrecisionTier) -> Self {
        Self { point, tier }
    }
}

/// A planned route between two coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Waypoints from origin to destination inclusive
    pub points: Vec<GeoPoint>,
    /// Great-circle distance in kilometers
    pub distance_km: f64,
    /// Estimated driving duration in minutes
    pub duration_minutes: u32,
}

impl Route {
    /// Distance formatted for display, e.g. "14.6 km"
    #[must_use]
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }

    /// Duration formatted for display, e.g. "36 min"
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}
