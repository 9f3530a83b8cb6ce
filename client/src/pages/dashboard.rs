//! Protected admin landing page.

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::state::auth::AuthState;
use crate::state::session::AdminSession;
use crate::util::auth::install_route_guard;

/// Dashboard page. Guarded: unauthenticated visits redirect to login with
/// this path as `returnUrl`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AdminSession>();
    install_route_guard(session, auth);

    let greeting = move || match auth.get().display_name() {
        Some(name) => format!("Welcome back, {name}."),
        None => String::new(),
    };

    view! {
        <Show when=move || auth.get().is_signed_in()>
            <div class="dashboard-page">
                <AdminHeader/>
                <main class="dashboard-page__body">
                    <h1>"Dashboard"</h1>
                    <p class="dashboard-page__greeting">{greeting}</p>
                </main>
            </div>
        </Show>
    }
}
