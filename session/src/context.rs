//! Explicit session context shared by the guard, auth service and interceptor.
//!
//! DESIGN
//! ======
//! One context per running app. It owns the store handle and the current-user
//! stream; mutations are `pub(crate)` so only this crate's components write.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use crate::auth::LoginResponse;
use crate::current_user::CurrentUser;
use crate::store::{SessionStore, StorageKey};
use crate::user::AdminUser;

#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current_user: CurrentUser,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").field("current_user", &self.current_user).finish_non_exhaustive()
    }
}

impl SessionContext {
    /// Wrap `store`, seeding the current-user stream from the persisted user.
    ///
    /// A corrupt or anonymous persisted user seeds an empty stream; the guard
    /// is responsible for purging corrupt data.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let initial = store.get(StorageKey::User).and_then(|raw| match AdminUser::decode_stored(&raw) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable persisted user");
                None
            }
        });
        Self { store, current_user: CurrentUser::new(initial) }
    }

    #[must_use]
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    #[must_use]
    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    /// Stored bearer token; empty strings count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read(StorageKey::AdminToken)
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read(StorageKey::RefreshToken)
    }

    /// Raw persisted user; empty strings count as absent.
    #[must_use]
    pub fn stored_user(&self) -> Option<String> {
        self.read(StorageKey::User)
    }

    /// Persist a fresh login, then publish its user.
    pub(crate) fn establish(&self, login: &LoginResponse) {
        self.store.set(StorageKey::AdminToken, &login.access_token);
        self.store.set(StorageKey::RefreshToken, &login.refresh_token);
        match login.user.encode_stored() {
            Ok(raw) => self.store.set(StorageKey::User, &raw),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize admin user");
                self.store.remove(StorageKey::User);
            }
        }
        self.current_user.publish(Some(login.user.clone()));
    }

    /// Remove every session key, then publish empty.
    pub(crate) fn clear(&self) {
        for key in StorageKey::SESSION {
            self.store.remove(key);
        }
        self.current_user.publish(None);
    }

    /// Drop a session whose stored user could not be parsed.
    pub(crate) fn purge_corrupt(&self) {
        self.store.remove(StorageKey::AdminToken);
        self.store.remove(StorageKey::User);
    }

    /// 401 handling only removes the legacy `token` key.
    pub(crate) fn purge_legacy_token(&self) {
        self.store.remove(StorageKey::LegacyToken);
    }

    fn read(&self, key: StorageKey) -> Option<String> {
        self.store.get(key).filter(|value| !value.is_empty())
    }
}
