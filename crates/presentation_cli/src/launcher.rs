//! Desktop launcher - Implements LauncherPort for a browser-only host
//!
//! A desktop has no Google Maps application and no geo: handler, so only
//! web URLs without an app restriction are resolvable. The navigation
//! ladder therefore walks down to its browser approaches here.

use application::ports::{LaunchError, LaunchRequest, LauncherPort};
use tracing::debug;

/// Launcher that opens web URLs with the system opener
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopLauncher;

impl DesktopLauncher {
    const fn opener_command() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

impl LauncherPort for DesktopLauncher {
    fn can_handle(&self, request: &LaunchRequest) -> bool {
        !request.is_restricted()
            && (request.uri.starts_with("http://") || request.uri.starts_with("https://"))
    }

    fn launch(&self, request: &LaunchRequest) -> Result<(), LaunchError> {
        if !self.can_handle(request) {
            return Err(LaunchError::NotResolvable);
        }

        debug!(uri = %request.uri, "Handing URL to the system opener");
        println!("🌐 Opening {}", request.uri);

        // Fire and forget, like an intent: the opener detaches on its own.
        std::process::Command::new(Self::opener_command())
            .arg(&request.uri)
            .spawn()
            .map(drop)
            .map_err(|e| LaunchError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use application::ports::GOOGLE_MAPS_APP;

    use super::*;

    #[test]
    fn handles_unrestricted_web_urls() {
        let launcher = DesktopLauncher;
        assert!(launcher.can_handle(&LaunchRequest::new("https://maps.google.com/maps?daddr=x")));
        assert!(launcher.can_handle(&LaunchRequest::new("http://example.com")));
    }

    #[test]
    fn rejects_app_scheme_uris() {
        let launcher = DesktopLauncher;
        assert!(!launcher.can_handle(&LaunchRequest::new("geo:0,0?q=x")));
        assert!(!launcher.can_handle(&LaunchRequest::new("google.navigation:q=x")));
    }

    #[test]
    fn rejects_restricted_requests() {
        let launcher = DesktopLauncher;
        let request =
            LaunchRequest::new("https://maps.google.com/maps?daddr=x").with_app(GOOGLE_MAPS_APP);
        assert!(!launcher.can_handle(&request));
    }

    #[test]
    fn launch_refuses_unresolvable_uris() {
        let launcher = DesktopLauncher;
        let result = launcher.launch(&LaunchRequest::new("geo:0,0?q=x"));
        assert!(matches!(result, Err(LaunchError::NotResolvable)));
    }
}
