//! External handler launcher port
//!
//! Defines the interface for handing a URI to the host platform. On a phone
//! this dispatches an intent; on desktop it shells out to the system opener.
//! Adapters decide which URIs they can resolve a handler for, so callers can
//! probe before committing to a launch.

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Handler identifier of the Google Maps application
pub const GOOGLE_MAPS_APP: &str = "com.google.android.apps.maps";

/// Restriction on which installed handler may service a launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerConstraint {
    /// Only the named application may handle the URI
    App(String),
    /// Any handler registered for the URI scheme will do
    Any,
}

/// A request to open a URI in an external handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// URI to hand to the platform
    pub uri: String,
    /// Which handlers are acceptable
    pub handler: HandlerConstraint,
}

impl LaunchRequest {
    /// Create a request any registered handler may service
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            handler: HandlerConstraint::Any,
        }
    }

    /// Restrict the request to a single named application
    #[must_use]
    pub fn with_app(mut self, app_id: impl Into<String>) -> Self {
        self.handler = HandlerConstraint::App(app_id.into());
        self
    }

    /// Check whether the request is restricted to a specific application
    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        matches!(self.handler, HandlerConstraint::App(_))
    }
}

/// Errors from a single launch attempt
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No installed handler accepts the URI under the given constraint
    #[error("No handler available for URI")]
    NotResolvable,

    /// A handler was found but the hand-off failed
    #[error("Launch failed: {0}")]
    Failed(String),
}

/// Port for opening URIs in external applications
#[cfg_attr(test, automock)]
pub trait LauncherPort: Send + Sync {
    /// Check whether a handler exists for the request without launching it
    fn can_handle(&self, request: &LaunchRequest) -> bool;

    /// Hand the URI to the platform for opening
    fn launch(&self, request: &LaunchRequest) -> Result<(), LaunchError>;
}
