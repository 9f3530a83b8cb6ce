//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navigation_bridge::NavigationBridge;
use crate::net::storage::BrowserStore;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::{AuthState, bind_current_user};
use crate::state::session::{AdminSession, build_config};

/// Root application component.
///
/// Builds the admin session once, mirrors its current-user stream into a
/// reactive signal, and provides both as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AdminSession::new(Arc::new(BrowserStore), build_config());
    let auth = RwSignal::new(AuthState::default());
    bind_current_user(session.auth().session().current_user(), auth);

    provide_context(session);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin.css"/>
        <Title text="Admin"/>

        <Router>
            <NavigationBridge/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <Route path=StaticSegment("admin") view=DashboardPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/admin"/> }/>
            </Routes>
        </Router>
    }
}
