//! Admin login page: username + password, then back to `returnUrl`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use admin_session::HttpError;
use admin_session::routes::{return_url_from_query, safe_return_url};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::AdminSession;

/// Trim the username and require both fields.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// User-facing text for a failed login.
pub fn login_error_message(error: &HttpError) -> String {
    match error {
        HttpError::Status { status: 400 | 401, .. } => "Invalid username or password.".to_owned(),
        HttpError::Status { status: 429, .. } => "Too many attempts. Try again shortly.".to_owned(),
        HttpError::Status { status, .. } if *status >= 500 => "The server is unavailable. Try again later.".to_owned(),
        HttpError::Status { message, .. } => format!("Sign-in failed: {message}"),
        HttpError::Transport(_) => "Cannot reach the server.".to_owned(),
        HttpError::Decode(_) => "Unexpected response from the server.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AdminSession>();
    let location = use_location();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, secret) = match validate_login_input(&username.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let target = safe_return_url(
            return_url_from_query(&location.search.get_untracked()).as_deref(),
            &session.config().home_route,
        );
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.auth().login(&name, &secret).await {
                    Ok(_) => {
                        password.set(String::new());
                        info.set(String::new());
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(login_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, secret, target);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage stories, events and testimonials"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
