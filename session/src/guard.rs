//! Navigation-time access check for protected admin routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called before entering any protected route. Holds no state between calls:
//! every check re-reads the session store.
//!
//! ERROR HANDLING
//! ==============
//! A corrupt stored user is never surfaced as an error. The token and user are
//! purged and the navigation is denied like any other unauthenticated one.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use crate::context::SessionContext;
use crate::routes::{Navigator, login_redirect};
use crate::user::AdminUser;

/// Pure decision over raw stored values.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Allow(AdminUser),
    /// Missing token or user, or a user without a username.
    Deny,
    /// Stored user is not valid JSON.
    Corrupt,
}

/// Decide from the stored token and serialized user alone.
#[must_use]
pub fn evaluate(token: Option<&str>, raw_user: Option<&str>) -> Verdict {
    let (Some(_), Some(raw)) = (token, raw_user) else {
        return Verdict::Deny;
    };
    match AdminUser::decode_stored(raw) {
        Ok(Some(user)) => Verdict::Allow(user),
        Ok(None) => Verdict::Deny,
        Err(_) => Verdict::Corrupt,
    }
}

/// Result of [`RouteGuard::check`].
#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    Allowed(AdminUser),
    /// Navigation was redirected to `redirect`.
    Denied { redirect: String },
}

impl GuardOutcome {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

pub struct RouteGuard {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl RouteGuard {
    pub fn new(session: SessionContext, navigator: Arc<dyn Navigator>, login_route: impl Into<String>) -> Self {
        Self { session, navigator, login_route: login_route.into() }
    }

    /// Gate navigation to `path`.
    ///
    /// On denial the navigator is sent to the login route with `path` as
    /// `returnUrl`.
    pub fn check(&self, path: &str) -> GuardOutcome {
        let token = self.session.token();
        let raw_user = self.session.stored_user();

        match evaluate(token.as_deref(), raw_user.as_deref()) {
            Verdict::Allow(user) => return GuardOutcome::Allowed(user),
            Verdict::Corrupt => {
                tracing::warn!(path, "stored admin user is corrupt; purging session");
                self.session.purge_corrupt();
            }
            Verdict::Deny => {}
        }

        let redirect = login_redirect(&self.login_route, path);
        tracing::debug!(path, %redirect, "navigation denied");
        self.navigator.navigate(&redirect);
        GuardOutcome::Denied { redirect }
    }

    pub fn can_activate(&self, path: &str) -> bool {
        self.check(path).is_allowed()
    }
}
