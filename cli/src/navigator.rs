//! Navigator for a process without a router.
//!
//! The guard and the 401 handler still ask to be sent to the login route; here
//! that request is only logged. Commands report the outcome themselves.

use admin_session::Navigator;

#[derive(Clone, Copy, Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(target_route = path, "navigation requested");
    }
}
