//! Router-backed [`Navigator`] for the guard and the 401 handler.
//!
//! DESIGN
//! ======
//! The session core is built once in `App`, outside the router, and needs a
//! `Send + Sync` navigator. `SignalNavigator` only records the requested path
//! in a signal; `NavigationBridge` (mounted inside the router) performs the
//! actual navigation.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use admin_session::Navigator;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct SignalNavigator {
    pending: RwSignal<Option<String>>,
}

impl SignalNavigator {
    pub fn new(pending: RwSignal<Option<String>>) -> Self {
        Self { pending }
    }

    /// Signal the bridge watches.
    pub fn pending(&self) -> RwSignal<Option<String>> {
        self.pending
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }
}

/// Join a location's path and query into a router target.
pub fn current_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// True when `target` is a bare path equal to `pathname`.
///
/// Following it would only strip the current query, e.g. the `returnUrl` of
/// the login page after a rejected password.
pub fn is_redundant(pathname: &str, target: &str) -> bool {
    !target.contains('?') && target == pathname
}
