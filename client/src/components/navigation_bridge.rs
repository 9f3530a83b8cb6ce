//! Performs navigations requested through the session's `SignalNavigator`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::navigator::is_redundant;
use crate::state::session::AdminSession;

/// Invisible component; mount once inside `<Router>`.
#[component]
pub fn NavigationBridge() -> impl IntoView {
    let session = expect_context::<AdminSession>();
    let pending = session.pending_navigation();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let Some(path) = pending.get() else {
            return;
        };
        if is_redundant(&location.pathname.get_untracked(), &path) {
            return;
        }
        navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
