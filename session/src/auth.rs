//! Login/logout against the content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth service is the only writer of a fresh session and the only
//! publisher on the current-user stream. Every request it makes goes through
//! the caller-supplied transport, which in practice is an [`crate::Intercepted`]
//! wrapper, so 401s during login/logout hit the same handlers as everything else.
//!
//! ORDERING
//! ========
//! Storage writes and stream publication happen after the response arrives
//! and before the returned future resolves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::{LOGIN_PATH, LOGOUT_PATH, SessionConfig};
use crate::context::SessionContext;
use crate::transport::{HttpError, HttpRequest, HttpResponse, Method, Transport};
use crate::user::AdminUser;

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub user: AdminUser,
}

pub struct AuthService<T> {
    session: SessionContext,
    transport: T,
    config: SessionConfig,
}

impl<T: Transport> AuthService<T> {
    pub fn new(session: SessionContext, transport: T, config: SessionConfig) -> Self {
        Self { session, transport, config }
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged, or [`HttpError::Decode`] when the
    /// response is not a login payload. Nothing is persisted on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, HttpError> {
        let request = HttpRequest::new(Method::Post, self.config.endpoint(LOGIN_PATH))
            .with_json(json!({ "username": username, "password": password }));

        let response = self.transport.send(request).await?;
        let login: LoginResponse =
            serde_json::from_value(response.body).map_err(|e| HttpError::Decode(e.to_string()))?;
        if login.access_token.is_empty() {
            return Err(HttpError::Decode("login response carries an empty access token".to_owned()));
        }

        self.session.establish(&login);
        tracing::info!(username = %login.user.username, "admin signed in");
        Ok(login)
    }

    /// End the session on the server and locally.
    ///
    /// Local state is cleared once the call completes, whether or not it
    /// succeeded, so an unreachable API cannot keep an admin signed in.
    ///
    /// # Errors
    ///
    /// Returns the transport error after the local session has been cleared.
    pub async fn logout(&self) -> Result<(), HttpError> {
        let mut request = HttpRequest::new(Method::Post, self.config.endpoint(LOGOUT_PATH));
        if let Some(token) = self.session.token() {
            request = request.with_bearer(token);
        }

        let result = self.transport.send(request).await;
        self.session.clear();

        match result {
            Ok(_) => {
                tracing::info!("admin signed out");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "logout request failed; local session cleared");
                Err(e)
            }
        }
    }

    /// Stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Presence-only check; the token is not validated.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.token().is_some()
    }

    /// Last value published on the current-user stream.
    #[must_use]
    pub fn current_user(&self) -> Option<AdminUser> {
        self.session.current_user().get()
    }

    /// Send an API request with the stored bearer token attached.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, HttpError> {
        if request.bearer.is_none() {
            request.bearer = self.session.token();
        }
        self.transport.send(request).await
    }

    /// [`AuthService::send`] against an API-relative `path`.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<HttpResponse, HttpError> {
        let mut request = HttpRequest::new(method, self.config.endpoint(path));
        request.body = body;
        self.send(request).await
    }
}
