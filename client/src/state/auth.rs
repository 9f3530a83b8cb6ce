//! Reactive auth state for the signed-in admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fed exclusively by the current-user stream (see [`bind_current_user`]), so
//! views never read storage directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use admin_session::{AdminUser, CurrentUser};
use leptos::prelude::*;

/// Authentication state tracking the current admin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AdminUser>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in the admin header.
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.display_name().to_owned())
    }
}

/// Mirror `stream` into `auth`; the current value is applied immediately.
pub fn bind_current_user(stream: &CurrentUser, auth: RwSignal<AuthState>) {
    stream.subscribe(move |user| {
        auth.set(AuthState { user: user.cloned() });
    });
}
