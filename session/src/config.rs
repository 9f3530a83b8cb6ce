//! Session configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "/api";
pub const DEFAULT_LOGIN_ROUTE: &str = "/admin/login";
pub const DEFAULT_HOME_ROUTE: &str = "/admin";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got `{value}`")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("{var} must be an absolute path starting with `/`, got `{value}`")]
    InvalidRoute { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Base URL of the content API, without trailing slash.
    pub api_url: String,
    /// Route unauthenticated navigations are sent to.
    pub login_route: String,
    /// Route used after login when no safe `returnUrl` is available.
    pub home_route: String,
    pub request_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            login_route: DEFAULT_LOGIN_ROUTE.to_owned(),
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SessionConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `ADMIN_API_URL`: default `/api`
    /// - `ADMIN_LOGIN_ROUTE`: default `/admin/login`
    /// - `ADMIN_HOME_ROUTE`: default `/admin`
    /// - `ADMIN_REQUEST_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = match lookup("ADMIN_API_URL") {
            Some(raw) => normalize_api_url("ADMIN_API_URL", &raw)?,
            None => defaults.api_url,
        };
        let login_route = match lookup("ADMIN_LOGIN_ROUTE") {
            Some(raw) => parse_route("ADMIN_LOGIN_ROUTE", &raw)?,
            None => defaults.login_route,
        };
        let home_route = match lookup("ADMIN_HOME_ROUTE") {
            Some(raw) => parse_route("ADMIN_HOME_ROUTE", &raw)?,
            None => defaults.home_route,
        };
        let request_timeout_secs = match lookup("ADMIN_REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_timeout("ADMIN_REQUEST_TIMEOUT_SECS", &raw)?,
            None => defaults.request_timeout_secs,
        };

        Ok(Self { api_url, login_route, home_route, request_timeout_secs })
    }

    /// Replace the API base URL, normalizing it the same way as the env var.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] for a blank URL.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url("ADMIN_API_URL", raw)?;
        Ok(self)
    }

    /// Absolute URL for an API path such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

fn normalize_api_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_owned())
}

fn parse_route(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') || trimmed.starts_with("//") {
        return Err(ConfigError::InvalidRoute { var, value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout { var, value: raw.to_owned() }),
    }
}
