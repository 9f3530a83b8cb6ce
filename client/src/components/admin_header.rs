//! Header bar for protected admin pages: signed-in admin and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::AdminSession;

#[component]
pub fn AdminHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AdminSession>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                // Local session is cleared either way; the guard then redirects.
                if let Err(e) = session.auth().logout().await {
                    tracing::debug!(error = %e, "sign-out request failed");
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &session;
            busy.set(false);
        }
    };

    let name = move || auth.get().display_name().unwrap_or_default();

    view! {
        <header class="admin-header">
            <span class="admin-header__title">"Admin"</span>
            <span class="admin-header__spacer"></span>
            <span class="admin-header__user">{name}</span>
            <button class="btn admin-header__logout" on:click=on_logout disabled=move || busy.get()>
                "Sign out"
            </button>
        </header>
    }
}
