//! Coordinate tables for the Toronto area
//!
//! Fixture data mapping known sites, street segments, neighborhoods, and
//! cities to coordinates. Tables are scanned in declaration order; the
//! first match wins.

use domain::GeoPoint;

use crate::models::{City, Neighborhood, Street};

/// A known site matched against the normalized address text
///
/// Every group must match, and a group matches when any one of its
/// fragments appears in the address.
struct ExactSite {
    groups: &'static [&'static [&'static str]],
    point: GeoPoint,
}

const fn site(groups: &'static [&'static [&'static str]], lat: f64, lon: f64) -> ExactSite {
    ExactSite {
        groups,
        point: GeoPoint::new_unchecked(lat, lon),
    }
}

/// Known sites in matching priority order
///
/// Short suffix forms also cover the long forms ("135 harbord st"
/// matches inside "135 harbord street"); directional forms differ as
/// substrings and are listed in both spellings.
const EXACT_SITES: &[ExactSite] = &[
    // Harbord Street near the university
    site(&[&["135 harbord st"]], 43.6598, -79.4037),
    // Midland Avenue plaza in Scarborough
    site(&[&["3360 midland ave"]], 43.7731, -79.2578),
    // Financial district
    site(&[&["100 king st w", "100 king street west"]], 43.6481, -79.3815),
    site(&[&["150 king st w", "150 king street west"]], 43.6481, -79.3825),
    site(&[&["200 king st w", "200 king street west"]], 43.6481, -79.3835),
    // Queen Street West
    site(&[&["200 queen st w", "200 queen street west"]], 43.6532, -79.3890),
    site(&[&["300 queen st w", "300 queen street west"]], 43.6532, -79.3920),
    site(&[&["400 queen st w", "400 queen street west"]], 43.6532, -79.3950),
    // Yonge Street blocks
    site(&[&["300 yonge st"]], 43.6555, -79.3844),
    site(&[&["500 yonge st"]], 43.6600, -79.3844),
    site(&[&["700 yonge st"]], 43.6650, -79.3844),
    // Bloor Street
    site(&[&["400 bloor st w", "400 bloor street west"]], 43.6677, -79.4103),
    site(&[&["500 bloor st w", "500 bloor street west"]], 43.6677, -79.4130),
    site(&[&["300 bloor st e", "300 bloor street east"]], 43.6677, -79.3750),
    // Dundas Street West
    site(&[&["500 dundas st w", "500 dundas street west"]], 43.6563, -79.4011),
    site(&[&["600 dundas st w", "600 dundas street west"]], 43.6563, -79.4050),
    // College Street
    site(&[&["400 college st"]], 43.6577, -79.4000),
    site(&[&["500 college st"]], 43.6577, -79.4030),
    // Kensington Market
    site(&[&["augusta ave"]], 43.6547, -79.4009),
    site(&[&["baldwin st"]], 43.6565, -79.3995),
    // Chinatown blocks of Spadina
    site(&[&["spadina ave"], &["400", "500"]], 43.6547, -79.3988),
    // Little Italy blocks of College
    site(&[&["college st"], &["600", "700"]], 43.6577, -79.4100),
    // Scarborough plaza units along Midland
    site(&[&["midland ave"], &["unit"], &["3360"]], 43.7731, -79.2578),
    site(&[&["midland ave"], &["unit"], &["2000"]], 43.7500, -79.2600),
    site(&[&["midland ave"], &["unit"], &["4000"]], 43.8000, -79.2550),
    // Uptown Yonge around Sheppard
    site(&[&["yonge st"], &["north york", "sheppard"]], 43.7615, -79.4111),
    // Mississauga city centre corridors
    site(&[&["mississauga"], &["hurontario", "main st"]], 43.5890, -79.6441),
];

/// Look up a known site in the normalized (lowercased, trimmed) address
pub(crate) fn exact_site(normalized: &str) -> Option<GeoPoint> {
    EXACT_SITES
        .iter()
        .find(|site| {
            site.groups.iter().all(|group| {
                group
                    .iter()
                    .any(|fragment| normalized.contains(fragment))
            })
        })
        .map(|site| site.point)
}

/// Approximate position along a street for a given street number
///
/// Streets without segment data return `None` and fall through to the
/// coarser tiers.
pub(crate) const fn street_segment(street: Street, number: u32) -> Option<GeoPoint> {
    match street {
        // Harbord runs east-west near the university
        Street::Harbord => Some(if number < 200 {
            GeoPoint::new_unchecked(43.6598, -79.4037) // east end
        } else {
            GeoPoint::new_unchecked(43.6598, -79.4150) // west end
        }),
        // Midland runs north-south through Scarborough
        Street::Midland => Some(if number < 2000 {
            GeoPoint::new_unchecked(43.7500, -79.2600) // south section
        } else if number < 4000 {
            GeoPoint::new_unchecked(43.7731, -79.2578) // middle section
        } else {
            GeoPoint::new_unchecked(43.8000, -79.2550) // north section
        }),
        Street::King => Some(if number < 300 {
            GeoPoint::new_unchecked(43.6481, -79.3773) // east end
        } else {
            GeoPoint::new_unchecked(43.6481, -79.3900) // west end
        }),
        Street::Queen => Some(if number < 300 {
            GeoPoint::new_unchecked(43.6532, -79.3832) // east end
        } else {
            GeoPoint::new_unchecked(43.6532, -79.3950) // west end
        }),
        // Yonge runs north-south
        Street::Yonge => Some(if number < 500 {
            GeoPoint::new_unchecked(43.6555, -79.3844) // south section
        } else if number < 1000 {
            GeoPoint::new_unchecked(43.6650, -79.3844) // mid section
        } else {
            GeoPoint::new_unchecked(43.7000, -79.3844) // north section
        }),
        Street::Bloor => Some(if number < 500 {
            GeoPoint::new_unchecked(43.6677, -79.3900) // east section
        } else {
            GeoPoint::new_unchecked(43.6677, -79.4103) // west section
        }),
        Street::Dundas => Some(if number < 500 {
            GeoPoint::new_unchecked(43.6563, -79.3800) // east section
        } else {
            GeoPoint::new_unchecked(43.6563, -79.4011) // west section
        }),
        _ => None,
    }
}

/// Centre point of a neighborhood, when mapped
pub(crate) const fn neighborhood_point(neighborhood: Neighborhood) -> Option<GeoPoint> {
    match neighborhood {
        Neighborhood::Scarborough => Some(GeoPoint::new_unchecked(43.7731, -79.2578)),
        Neighborhood::NorthYork => Some(GeoPoint::new_unchecked(43.7615, -79.4111)),
        Neighborhood::Etobicoke => Some(GeoPoint::new_unchecked(43.6205, -79.5132)),
        _ => None,
    }
}

/// Centre point of a city, when mapped
pub(crate) const fn city_point(city: City) -> Option<GeoPoint> {
    match city {
        City::Toronto => Some(GeoPoint::toronto_downtown()),
        City::Mississauga => Some(GeoPoint::mississauga()),
        City::Markham => Some(GeoPoint::markham()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(point: GeoPoint, lat: f64, lon: f64) {
        assert!((point.latitude() - lat).abs() < 1e-9, "latitude mismatch");
        assert!((point.longitude() - lon).abs() < 1e-9, "longitude mismatch");
    }

    #[test]
    fn test_exact_site_simple() {
        let point = exact_site("135 harbord st, toronto").expect("site");
        assert_point(point, 43.6598, -79.4037);
    }

    #[test]
    fn test_exact_site_with_surrounding_text() {
        let point = exact_site("the pasta shop at 135 harbord street near bathurst").expect("site");
        assert_point(point, 43.6598, -79.4037);
    }

    #[test]
    fn test_exact_site_directional_variants() {
        let short = exact_site("100 king st w, toronto").expect("site");
        let long = exact_site("100 king street west, toronto").expect("site");
        assert_eq!(short, long);
        assert_point(short, 43.6481, -79.3815);
    }

    #[test]
    fn test_exact_site_conjunction() {
        let point = exact_site("400 spadina ave, chinatown, toronto").expect("site");
        assert_point(point, 43.6547, -79.3988);

        // Spadina without a 400/500 block number is not a known site
        assert_eq!(exact_site("85 spadina ave, toronto"), None);
        assert_eq!(exact_site("420 spadina ave, toronto"), None);
    }

    #[test]
    fn test_exact_site_little_italy_blocks() {
        let point = exact_site("600 college st, toronto").expect("site");
        assert_point(point, 43.6577, -79.4100);

        // 650 contains neither the fragment "600" nor "700"
        assert_eq!(exact_site("650 college st, toronto"), None);
    }

    #[test]
    fn test_exact_site_midland_units() {
        let mid = exact_site("3360 midland ave unit 5").expect("site");
        assert_point(mid, 43.7731, -79.2578);

        let south = exact_site("2000 midland ave unit 12").expect("site");
        assert_point(south, 43.7500, -79.2600);

        let north = exact_site("4000 midland avenue unit 3").expect("site");
        assert_point(north, 43.8000, -79.2550);
    }

    #[test]
    fn test_exact_site_uptown_yonge() {
        let point = exact_site("4900 yonge st, north york").expect("site");
        assert_point(point, 43.7615, -79.4111);

        let sheppard = exact_site("yonge st at sheppard").expect("site");
        assert_eq!(point, sheppard);
    }

    #[test]
    fn test_exact_site_numbered_yonge_beats_uptown_rule() {
        // Numbered Yonge blocks are declared first
        let point = exact_site("300 yonge st, north york").expect("site");
        assert_point(point, 43.6555, -79.3844);
    }

    #[test]
    fn test_exact_site_mississauga_corridors() {
        let point = exact_site("100 hurontario st, mississauga").expect("site");
        assert_point(point, 43.5890, -79.6441);

        assert_eq!(exact_site("somewhere in mississauga"), None);
    }

    #[test]
    fn test_exact_site_no_match() {
        assert_eq!(exact_site("9999 unknown rd, ottawa"), None);
    }

    #[test]
    fn test_street_segment_boundaries() {
        assert_point(
            street_segment(Street::Harbord, 199).expect("segment"),
            43.6598,
            -79.4037,
        );
        assert_point(
            street_segment(Street::Harbord, 200).expect("segment"),
            43.6598,
            -79.4150,
        );
    }

    #[test]
    fn test_street_segment_three_way_split() {
        assert_point(
            street_segment(Street::Yonge, 499).expect("segment"),
            43.6555,
            -79.3844,
        );
        assert_point(
            street_segment(Street::Yonge, 999).expect("segment"),
            43.6650,
            -79.3844,
        );
        assert_point(
            street_segment(Street::Yonge, 1000).expect("segment"),
            43.7000,
            -79.3844,
        );
    }

    #[test]
    fn test_street_segment_midland_sections() {
        assert_point(
            street_segment(Street::Midland, 0).expect("segment"),
            43.7500,
            -79.2600,
        );
        assert_point(
            street_segment(Street::Midland, 3360).expect("segment"),
            43.7731,
            -79.2578,
        );
        assert_point(
            street_segment(Street::Midland, 4000).expect("segment"),
            43.8000,
            -79.2550,
        );
    }

    #[test]
    fn test_streets_without_segments() {
        assert_eq!(street_segment(Street::Spadina, 400), None);
        assert_eq!(street_segment(Street::College, 100), None);
        assert_eq!(street_segment(Street::University, 200), None);
    }

    #[test]
    fn test_neighborhood_points() {
        assert_point(
            neighborhood_point(Neighborhood::Scarborough).expect("point"),
            43.7731,
            -79.2578,
        );
        assert_point(
            neighborhood_point(Neighborhood::Etobicoke).expect("point"),
            43.6205,
            -79.5132,
        );
        assert_eq!(neighborhood_point(Neighborhood::Kensington), None);
        assert_eq!(neighborhood_point(Neighborhood::Downtown), None);
    }

    #[test]
    fn test_city_points() {
        assert_point(city_point(City::Toronto).expect("point"), 43.6532, -79.3832);
        assert_point(
            city_point(City::Markham).expect("point"),
            43.8561,
            -79.3370,
        );
        assert_eq!(city_point(City::Vaughan), None);
        assert_eq!(city_point(City::Brampton), None);
    }
}
