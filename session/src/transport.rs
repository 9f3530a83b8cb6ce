//! HTTP request/response model and the transport seam.
//!
//! The browser (`gloo-net`) and the CLI (`reqwest`) each implement
//! [`Transport`]. Non-2xx responses are reported as [`HttpError::Status`], so
//! every failure reaches the interceptor chain through the same path.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::str::FromStr;

use serde_json::Value;

/// HTTP verbs used by the admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(format!("unsupported HTTP method: {other}")),
        }
    }
}

/// Outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    /// Bearer credential sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), body: None, bearer: None }
    }

    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Value for the `Authorization` header, if a bearer token is attached.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(|token| format!("Bearer {token}"))
    }
}

/// Successful (2xx) response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Parsed JSON body, `Value::Null` when the body was empty.
    pub body: Value,
}

/// Failure of a single HTTP call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// No response was received.
    #[error("transport failure: {0}")]
    Transport(String),
    /// A response arrived but its body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl HttpError {
    /// Build a status error from a raw response body.
    ///
    /// Uses the JSON `message` (or `error`) field when present, otherwise the
    /// trimmed body text, otherwise a generic reason.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                ["message", "error"]
                    .into_iter()
                    .find_map(|field| json.get(field).and_then(Value::as_str).map(str::to_owned))
            })
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_owned())
            })
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Status { status, message }
    }

    /// HTTP status when the server responded.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Parse a response body as JSON, treating an empty body as `null`.
///
/// # Errors
///
/// Returns [`HttpError::Decode`] for non-empty bodies that are not JSON.
pub fn parse_body(body: &str) -> Result<Value, HttpError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| HttpError::Decode(e.to_string()))
}

/// Map a completed response onto the transport contract: 2xx is success,
/// anything else is [`HttpError::Status`].
///
/// # Errors
///
/// [`HttpError::Status`] for non-2xx statuses, [`HttpError::Decode`] for a
/// 2xx body that is not JSON.
pub fn classify(status: u16, body: &str) -> Result<HttpResponse, HttpError> {
    if (200..300).contains(&status) {
        let body = parse_body(body)?;
        Ok(HttpResponse { status, body })
    } else {
        Err(HttpError::from_status(status, body))
    }
}

/// Sends one request and yields the response or the failure.
///
/// Futures are not required to be `Send`; browser fetch futures are not.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
