//! Key-value persistence for the admin session.
//!
//! DESIGN
//! ======
//! The store is deliberately dumb: opaque strings under a closed set of keys,
//! no validation on write. Consumers (guard, auth service) validate on read.
//! Backends for the browser and the CLI live in their own crates.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Names under which session values are persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Bearer token written by login, read by the guard.
    AdminToken,
    /// Refresh token written by login.
    RefreshToken,
    /// Serialized [`crate::AdminUser`].
    User,
    /// Legacy token key. Never written here, but purged on 401.
    LegacyToken,
}

impl StorageKey {
    /// Every key a backend may hold.
    pub const ALL: [Self; 4] = [Self::AdminToken, Self::RefreshToken, Self::User, Self::LegacyToken];

    /// The three keys that together make up a logged-in session.
    pub const SESSION: [Self; 3] = [Self::AdminToken, Self::RefreshToken, Self::User];

    /// Persisted name of the key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdminToken => "admin_token",
            Self::RefreshToken => "refresh_token",
            Self::User => "user",
            Self::LegacyToken => "token",
        }
    }

    /// Look a key up by its persisted name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// Get/set/remove over opaque session strings.
///
/// Implementations swallow backend failures (treating them as an absent value
/// or a lost write) and log them; callers never see storage errors.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&self, key: StorageKey, value: &str);
    fn remove(&self, key: StorageKey);
}

/// Process-local store used by tests and headless callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (StorageKey, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    /// Whether a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: StorageKey) -> bool {
        self.entries().contains_key(&key)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<StorageKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries().get(&key).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) {
        self.entries().insert(key, value.to_owned());
    }

    fn remove(&self, key: StorageKey) {
        self.entries().remove(&key);
    }
}
