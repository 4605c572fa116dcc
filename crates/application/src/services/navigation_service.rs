//! Directions hand-off service
//!
//! Opens driving directions to a destination by walking a fixed ladder of
//! launch approaches, from turn-by-turn navigation in the Google Maps app
//! down to a plain web search. Each approach is probed before launching;
//! a failed probe or a failed launch moves on to the next rung.

use std::{fmt, sync::Arc};

use domain::GeoPoint;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::ports::{GOOGLE_MAPS_APP, LaunchRequest, LauncherPort};

/// How a successful directions hand-off was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// Turn-by-turn navigation inside the Google Maps app
    MapsNavigation,
    /// Google Maps app opened on the destination
    MapsDestination,
    /// Any installed map application
    AnyMapApp,
    /// Directions page in a web browser
    Browser,
    /// Web search for directions as a last resort
    WebSearch,
}

impl Approach {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MapsNavigation => "Google Maps navigation",
            Self::MapsDestination => "Google Maps destination",
            Self::AnyMapApp => "map app",
            Self::Browser => "browser",
            Self::WebSearch => "web search",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Failure to open directions by any means
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// Destination address was blank
    #[error("Restaurant address not available")]
    MissingAddress,

    /// Every launch approach was probed and none could run
    #[error("Unable to open directions. Please install Google Maps or a web browser.")]
    ExhaustedApproaches,
}

/// Service for opening directions in an external application
pub struct NavigationService {
    launcher: Arc<dyn LauncherPort>,
}

impl fmt::Debug for NavigationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationService").finish_non_exhaustive()
    }
}

impl NavigationService {
    /// Create a new navigation service
    pub fn new(launcher: Arc<dyn LauncherPort>) -> Self {
        Self { launcher }
    }

    /// Open driving directions to a destination address
    ///
    /// Approaches are tried in a fixed order and the first one that launches
    /// wins. In-app navigation is only attempted when the caller knows the
    /// current location, since turn-by-turn guidance needs a starting point.
    /// A launch failure never propagates; the ladder moves on.
    #[instrument(skip(self), fields(destination_len = destination.len()))]
    pub fn open_directions(
        &self,
        destination: &str,
        current_location: Option<GeoPoint>,
    ) -> Result<Approach, NavigationError> {
        let destination = destination.trim();
        if destination.is_empty() {
            warn!("Directions requested without a destination address");
            return Err(NavigationError::MissingAddress);
        }

        let encoded = url_encode(destination);

        if current_location.is_some() {
            let request = LaunchRequest::new(format!("google.navigation:q={encoded}&mode=d"))
                .with_app(GOOGLE_MAPS_APP);
            if self.try_launch(&request, Approach::MapsNavigation) {
                return Ok(Approach::MapsNavigation);
            }
        } else {
            debug!("Current location unknown, skipping in-app navigation");
        }

        // The Maps app accepts both its web URL and a bare geo: URI.
        let maps_url = format!("https://maps.google.com/maps?daddr={encoded}&mode=driving");
        let geo_uri = format!("geo:0,0?q={encoded}");

        let request = LaunchRequest::new(maps_url.clone()).with_app(GOOGLE_MAPS_APP);
        if self.try_launch(&request, Approach::MapsDestination) {
            return Ok(Approach::MapsDestination);
        }
        let request = LaunchRequest::new(geo_uri.clone()).with_app(GOOGLE_MAPS_APP);
        if self.try_launch(&request, Approach::MapsDestination) {
            return Ok(Approach::MapsDestination);
        }

        let request = LaunchRequest::new(geo_uri);
        if self.try_launch(&request, Approach::AnyMapApp) {
            return Ok(Approach::AnyMapApp);
        }

        let request = LaunchRequest::new(maps_url);
        if self.try_launch(&request, Approach::Browser) {
            return Ok(Approach::Browser);
        }

        let query = url_encode(&format!("directions to {destination}"));
        let request = LaunchRequest::new(format!("https://www.google.com/search?q={query}"));
        if self.try_launch(&request, Approach::WebSearch) {
            return Ok(Approach::WebSearch);
        }

        warn!("All launch approaches exhausted");
        Err(NavigationError::ExhaustedApproaches)
    }

    fn try_launch(&self, request: &LaunchRequest, approach: Approach) -> bool {
        if !self.launcher.can_handle(request) {
            debug!(uri = %request.uri, %approach, "No handler for approach");
            return false;
        }
        match self.launcher.launch(request) {
            Ok(()) => {
                debug!(uri = %request.uri, %approach, "Opened directions");
                true
            },
            Err(err) => {
                warn!(uri = %request.uri, %approach, error = %err, "Launch attempt failed");
                false
            },
        }
    }
}

/// Percent-encode a string for embedding in a URI query
///
/// Alphanumerics and `-_.~` pass through; everything else, including spaces,
/// becomes a `%`-escaped octet.
fn url_encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            },
            _ => {
                result.push('%');
                result.push_str(&format!("{byte:02X}"));
            },
        }
    }
    result
}
