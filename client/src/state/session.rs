//! App-wide admin session, provided via context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once in `App`. Every API call made by a page goes through
//! [`AdminSession::auth`], so the 401/403/404/5xx handling installed here
//! applies to all of them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use admin_session::{
    AuthService, Intercepted, InterceptorChain, Navigator, RouteGuard, SessionConfig, SessionContext, SessionStore,
    StatusDispatch,
};
use leptos::prelude::*;

use crate::net::navigator::SignalNavigator;
use crate::net::transport::GlooTransport;

pub type AdminAuth = AuthService<Intercepted<GlooTransport>>;

#[derive(Clone)]
pub struct AdminSession {
    auth: Arc<AdminAuth>,
    guard: Arc<RouteGuard>,
    navigator: SignalNavigator,
}

impl AdminSession {
    /// Assemble the session core over `store`.
    ///
    /// The guard and the status handler share one navigator; the
    /// `NavigationBridge` component turns its requests into router navigations.
    pub fn new(store: Arc<dyn SessionStore>, config: SessionConfig) -> Self {
        let navigator = SignalNavigator::new(RwSignal::new(None));
        let shared_navigator: Arc<dyn Navigator> = Arc::new(navigator);
        let context = SessionContext::new(store);

        let chain = InterceptorChain::new().with(StatusDispatch::new(
            context.clone(),
            Arc::clone(&shared_navigator),
            config.login_route.clone(),
        ));
        let guard = RouteGuard::new(context.clone(), shared_navigator, config.login_route.clone());
        let auth = AuthService::new(context, Intercepted::new(GlooTransport, chain), config);

        Self { auth: Arc::new(auth), guard: Arc::new(guard), navigator }
    }

    pub fn auth(&self) -> &AdminAuth {
        &self.auth
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn config(&self) -> &SessionConfig {
        self.auth.config()
    }

    /// Pending navigation requested by the guard or the 401 handler.
    pub fn pending_navigation(&self) -> RwSignal<Option<String>> {
        self.navigator.pending()
    }
}

/// Config baked in at build time (`ADMIN_API_URL` etc.), defaults otherwise.
pub fn build_config() -> SessionConfig {
    SessionConfig::from_lookup(compiled_env).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid build-time admin config; using defaults");
        SessionConfig::default()
    })
}

fn compiled_env(key: &str) -> Option<String> {
    let value = match key {
        "ADMIN_API_URL" => option_env!("ADMIN_API_URL"),
        "ADMIN_LOGIN_ROUTE" => option_env!("ADMIN_LOGIN_ROUTE"),
        "ADMIN_HOME_ROUTE" => option_env!("ADMIN_HOME_ROUTE"),
        "ADMIN_REQUEST_TIMEOUT_SECS" => option_env!("ADMIN_REQUEST_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_owned)
}
