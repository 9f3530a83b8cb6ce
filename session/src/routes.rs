//! Navigation seam and login-redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard and the 401 handler redirect through [`Navigator`]; the login page
//! reads `returnUrl` back with [`return_url_from_query`] and only follows it
//! when [`safe_return_url`] accepts it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Query parameter carrying the originally requested path.
pub const RETURN_URL_PARAM: &str = "returnUrl";

/// Performs a client-side navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Login URL that sends the user back to `return_url` afterwards.
#[must_use]
pub fn login_redirect(login_route: &str, return_url: &str) -> String {
    format!("{login_route}?{RETURN_URL_PARAM}={}", urlencoding::encode(return_url))
}

/// Extract and decode `returnUrl` from a query string (leading `?` optional).
#[must_use]
pub fn return_url_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == RETURN_URL_PARAM)
        .and_then(|(_, raw)| urlencoding::decode(&raw.replace('+', " ")).ok().map(|v| v.into_owned()))
        .filter(|value| !value.is_empty())
}

/// Follow `candidate` only if it is a same-origin absolute path.
///
/// Rejects protocol-relative (`//host`) and backslash tricks so a crafted
/// `returnUrl` cannot send an admin off-site after login.
#[must_use]
pub fn safe_return_url(candidate: Option<&str>, fallback: &str) -> String {
    match candidate.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path.to_owned(),
        _ => fallback.to_owned(),
    }
}
