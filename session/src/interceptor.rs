//! HTTP error interceptor chain.
//!
//! DESIGN
//! ======
//! Tap-and-forward: a failed call is shown to every [`ErrorHandler`] in
//! registration order, then the original error is returned to the caller
//! unchanged. Handlers only get a shared reference, so they cannot swallow or
//! rewrite the failure.
//!
//! [`StatusDispatch`] is the stock handler that reacts to 401/403/404/5xx.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::sync::Arc;

use crate::context::SessionContext;
use crate::routes::Navigator;
use crate::transport::{HttpError, HttpRequest, HttpResponse, Transport};

/// Side effect run when a request fails.
pub trait ErrorHandler: Send + Sync {
    fn on_error(&self, request: &HttpRequest, error: &HttpError);
}

/// Adapts a closure into an [`ErrorHandler`].
pub struct ClosureHandler<F>(pub F);

impl<F> ErrorHandler for ClosureHandler<F>
where
    F: Fn(&HttpRequest, &HttpError) + Send + Sync,
{
    fn on_error(&self, request: &HttpRequest, error: &HttpError) {
        (self.0)(request, error);
    }
}

/// Ordered list of error handlers.
#[derive(Default)]
pub struct InterceptorChain {
    handlers: Vec<Box<dyn ErrorHandler>>,
}

impl InterceptorChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`InterceptorChain::push`].
    #[must_use]
    pub fn with(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.push(handler);
        self
    }

    pub fn push(&mut self, handler: impl ErrorHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Show `error` to every handler, in order.
    pub fn observe(&self, request: &HttpRequest, error: &HttpError) {
        for handler in &self.handlers {
            handler.on_error(request, error);
        }
    }
}

/// Transport wrapper that runs an [`InterceptorChain`] on every failure.
pub struct Intercepted<T> {
    inner: T,
    chain: InterceptorChain,
}

impl<T> Intercepted<T> {
    pub fn new(inner: T, chain: InterceptorChain) -> Self {
        Self { inner, chain }
    }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport> Transport for Intercepted<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let snapshot = request.clone();
        let result = self.inner.send(request).await;
        if let Err(error) = &result {
            self.chain.observe(&snapshot, error);
        }
        result
    }
}

/// Stock status-code handler.
///
/// - 401: remove the legacy `token` key and navigate to the login route.
/// - 403, 404: warn.
/// - 5xx: error.
pub struct StatusDispatch {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl StatusDispatch {
    pub fn new(session: SessionContext, navigator: Arc<dyn Navigator>, login_route: impl Into<String>) -> Self {
        Self { session, navigator, login_route: login_route.into() }
    }
}

impl ErrorHandler for StatusDispatch {
    fn on_error(&self, request: &HttpRequest, error: &HttpError) {
        let url = request.url.as_str();
        match error.status() {
            Some(401) => {
                tracing::warn!(url, "unauthorized; returning to login");
                // Only `token` is purged here; `admin_token` and `user` survive.
                self.session.purge_legacy_token();
                self.navigator.navigate(&self.login_route);
            }
            Some(403) => tracing::warn!(url, "access forbidden"),
            Some(404) => tracing::warn!(url, "resource not found"),
            Some(status) if status >= 500 => tracing::error!(url, status, error = %error, "server error"),
            _ => {}
        }
    }
}
