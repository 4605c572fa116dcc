//! Synthetic route planning
//!
//! Builds a deterministic preview route between two coordinates: the
//! endpoints plus seven intermediate points pushed slightly off the
//! straight line so the polyline reads like a road rather than a ruler.

use std::f64::consts::PI;

use domain::GeoPoint;

use crate::models::Route;

/// Number of segments the route is divided into (yields 7 intermediates)
const ROUTE_SEGMENTS: u32 = 8;
/// Peak lateral offset applied mid-route, in degrees
const CURVE_AMPLITUDE: f64 = 0.001;
/// Average city driving pace with traffic (25 km/h)
const MINUTES_PER_KM: f64 = 2.4;

/// Plan a synthetic route between two coordinates
///
/// Deterministic: the same endpoints always produce the same route of
/// exactly nine points, with a Haversine distance and a duration of
/// `ceil(distance * 2.4)` minutes.
#[must_use]
pub fn plan_route(origin: GeoPoint, destination: GeoPoint) -> Route {
    let lat_diff = destination.latitude() - origin.latitude();
    let lon_diff = destination.longitude() - origin.longitude();

    let mut points = Vec::with_capacity(ROUTE_SEGMENTS as usize + 1);
    points.push(origin);

    for i in 1..ROUTE_SEGMENTS {
        let fraction = f64::from(i) / f64::from(ROUTE_SEGMENTS);
        // Sinusoidal bow, full strength on latitude and half on longitude
        let curve = (fraction * PI).sin() * CURVE_AMPLITUDE;

        points.push(GeoPoint::new_unchecked(
            lat_diff.mul_add(fraction, origin.latitude()) + curve,
            lon_diff.mul_add(fraction, origin.longitude()) + curve * 0.5,
        ));
    }

    points.push(destination);

    let distance_km = origin.distance_km(&destination);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let duration_minutes = (distance_km * MINUTES_PER_KM).ceil() as u32;

    Route {
        points,
        distance_km,
        duration_minutes,
    }
}
