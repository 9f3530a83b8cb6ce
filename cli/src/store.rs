//! File-backed session store for the CLI.
//!
//! DESIGN
//! ======
//! The session lives in a single JSON object keyed by the persisted key names
//! (`admin_token`, `refresh_token`, `user`, `token`). It is read once when the
//! store is opened and rewritten in full after every mutation, so a second
//! invocation of the CLI sees the state the first one left behind.
//!
//! ERROR HANDLING
//! ==============
//! The `SessionStore` contract has no error channel. A missing file is an
//! empty session; an unreadable or malformed file is logged and treated as
//! empty; a failed write is logged and the in-memory value still changes.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use admin_session::{SessionStore, StorageKey};
use serde_json::{Map, Value};

pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<StorageKey, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading whatever is already there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load(&path);
        Self { path, entries: Mutex::new(entries) }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<StorageKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, entries: &HashMap<StorageKey, String>) {
        let object: Map<String, Value> = entries
            .iter()
            .map(|(key, value)| (key.as_str().to_owned(), Value::String(value.clone())))
            .collect();
        let rendered = match serde_json::to_string_pretty(&Value::Object(object)) {
            Ok(rendered) => rendered,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode session file");
                return;
            }
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, path = %parent.display(), "failed to create session directory");
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, rendered) {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to write session file");
        }
    }
}

fn load(path: &Path) -> HashMap<StorageKey, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "failed to read session file");
            return HashMap::new();
        }
    };
    if raw.trim().is_empty() {
        return HashMap::new();
    }
    let object = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "session file is not a JSON object; ignoring");
            return HashMap::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "session file is not valid JSON; ignoring");
            return HashMap::new();
        }
    };

    object
        .into_iter()
        .filter_map(|(name, value)| {
            let key = StorageKey::from_name(&name)?;
            match value {
                Value::String(value) => Some((key, value)),
                _ => None,
            }
        })
        .collect()
}

impl SessionStore for FileStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries().get(&key).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) {
        let mut entries = self.entries();
        entries.insert(key, value.to_owned());
        self.persist(&entries);
    }

    fn remove(&self, key: StorageKey) {
        let mut entries = self.entries();
        if entries.remove(&key).is_some() {
            self.persist(&entries);
        }
    }
}
