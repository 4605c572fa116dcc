//! Free-text address parsing
//!
//! Pulls street numbers, street names, cities, neighborhoods, and postal
//! prefixes out of unstructured address strings. Matching is
//! case-insensitive; input is lowercased and trimmed internally.

use crate::models::{AddressComponents, City, Neighborhood, Street};

/// Toronto-area forward sortation areas recognized in addresses
const FORWARD_SORTATION_AREAS: [&str; 100] = [
    "m1v", "m1w", "m1x", "m1s", "m1t", "m1r", "m1p", "m1n", "m1m", "m1l", "m1k", "m1j", "m1h",
    "m1g", "m1e", "m1c", "m1b", "m2h", "m2j", "m2k", "m2l", "m2m", "m2n", "m2p", "m2r", "m3a",
    "m3b", "m3c", "m3h", "m3j", "m3k", "m3l", "m3m", "m3n", "m4a", "m4b", "m4c", "m4e", "m4g",
    "m4h", "m4j", "m4k", "m4l", "m4m", "m4n", "m4p", "m4r", "m4s", "m4t", "m4v", "m4w", "m4x",
    "m4y", "m5a", "m5b", "m5c", "m5e", "m5g", "m5h", "m5j", "m5k", "m5l", "m5m", "m5n", "m5p",
    "m5r", "m5s", "m5t", "m5v", "m5w", "m5x", "m6a", "m6b", "m6c", "m6e", "m6g", "m6h", "m6j",
    "m6k", "m6l", "m6m", "m6n", "m6p", "m6r", "m6s", "m8v", "m8w", "m8x", "m8y", "m8z", "m9a",
    "m9b", "m9c", "m9l", "m9m", "m9n", "m9p", "m9r", "m9v", "m9w",
];

/// Parse a free-text address into its components
///
/// Never fails: unrecognized parts simply stay `None`.
#[must_use]
pub fn parse_components(address: &str) -> AddressComponents {
    let address = address.trim().to_lowercase();

    let city = find_city(&address);
    // Neighborhoods are Toronto districts; without the city name the
    // district word alone is not trusted.
    let neighborhood = if city == Some(City::Toronto) {
        find_neighborhood(&address)
    } else {
        None
    };

    AddressComponents {
        street_number: extract_street_number(&address),
        street: find_street(&address),
        city,
        neighborhood,
        postal_code: find_postal_code(&address),
    }
}

/// First whitespace-separated token that is a number or a number range
///
/// Ranges like "100-200" yield the first number.
fn extract_street_number(address: &str) -> Option<String> {
    for token in address.split_whitespace() {
        if is_digits(token) {
            return Some(token.to_string());
        }
        if let Some((first, rest)) = token.split_once('-') {
            if is_digits(first) && is_digits(rest) {
                return Some(first.to_string());
            }
        }
    }
    None
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn find_street(address: &str) -> Option<Street> {
    Street::ALL
        .into_iter()
        .find(|street| address.contains(street.matching_fragment()))
}

fn find_city(address: &str) -> Option<City> {
    City::ALL
        .into_iter()
        .find(|city| address.contains(city.matching_fragment()))
}

fn find_neighborhood(address: &str) -> Option<Neighborhood> {
    Neighborhood::ALL
        .into_iter()
        .find(|neighborhood| address.contains(neighborhood.matching_fragment()))
}

fn find_postal_code(address: &str) -> Option<String> {
    FORWARD_SORTATION_AREAS
        .into_iter()
        .find(|fsa| address.contains(fsa))
        .map(ToString::to_string)
}
