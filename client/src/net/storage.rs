//! `localStorage`-backed session store.
//!
//! Browser (csr): reads and writes `window.localStorage`.
//! Elsewhere: every read is absent and every write is dropped, so components
//! still render (and tests still run) without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use admin_session::{SessionStore, StorageKey};

/// Session store over the browser profile's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        tracing::warn!("localStorage unavailable; session will not persist");
    }
    storage
}

impl SessionStore for BrowserStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key.as_str()).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: StorageKey, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key.as_str(), value) {
                tracing::warn!(key = key.as_str(), error = ?e, "localStorage write failed");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: StorageKey) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.remove_item(key.as_str()) {
                tracing::warn!(key = key.as_str(), error = ?e, "localStorage remove failed");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
