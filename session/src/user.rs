//! Admin user payload returned by the content API.
//!
//! The server's user object is open-ended. Only `username` is interpreted;
//! every other field is carried through untouched in `profile`.
//!
//! ERROR HANDLING
//! ==============
//! Decoding a persisted user has three outcomes, and callers must treat them
//! differently: malformed JSON means the stored session is corrupt and gets
//! purged, while well-formed JSON without a username is merely anonymous.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error returned when a stored user is not valid JSON.
#[derive(Debug, thiserror::Error)]
#[error("stored user is not valid JSON: {0}")]
pub struct UserDecodeError(#[from] serde_json::Error);

/// Authenticated admin identity.
///
/// Deserialization applies the same rule as [`AdminUser::from_value`], so a
/// login payload without a usable username is rejected rather than stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct AdminUser {
    pub username: String,
    /// Remaining profile fields, preserved verbatim.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl AdminUser {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), profile: Map::new() }
    }

    /// Attach an extra profile field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.profile.insert(key.into(), value);
        self
    }

    /// Optional display name from the profile, falling back to the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.profile
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Decode a user as persisted in the session store.
    ///
    /// Returns `Ok(None)` for well-formed JSON that does not carry a non-empty
    /// string `username` (including non-object values such as `null`).
    ///
    /// # Errors
    ///
    /// Returns [`UserDecodeError`] when `raw` is not valid JSON.
    pub fn decode_stored(raw: &str) -> Result<Option<Self>, UserDecodeError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(value))
    }

    /// Interpret an already-parsed JSON value as a user.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        let username = match fields.remove("username") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return None,
        };
        Some(Self { username, profile: fields })
    }

    /// Serialize for the session store.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn encode_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl TryFrom<Value> for AdminUser {
    type Error = &'static str;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or("user must be an object with a non-empty string `username`")
    }
}
