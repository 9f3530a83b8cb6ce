//! Shared route-guard wiring for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page installs the same guard so unauthenticated visits and
//! sign-outs redirect to the login route with an identical `returnUrl`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::navigator::current_path;
use crate::state::auth::AuthState;
use crate::state::session::AdminSession;

/// Run the route guard on mount and again whenever the current user changes.
///
/// The guard reads storage on every run, so a stale signed-in mirror cannot
/// let a purged session through. Must be called inside the router.
pub fn install_route_guard(session: AdminSession, auth: RwSignal<AuthState>) {
    let location = use_location();
    Effect::new(move || {
        auth.track();
        let path = current_path(&location.pathname.get_untracked(), &location.search.get_untracked());
        session.guard().check(&path);
    });
}
