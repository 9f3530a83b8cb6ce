use super::*;

// =============================================================
// StorageKey
// =============================================================

#[test]
fn storage_key_names_match_persisted_layout() {
    assert_eq!(StorageKey::AdminToken.as_str(), "admin_token");
    assert_eq!(StorageKey::RefreshToken.as_str(), "refresh_token");
    assert_eq!(StorageKey::User.as_str(), "user");
    assert_eq!(StorageKey::LegacyToken.as_str(), "token");
}

#[test]
fn storage_key_from_name_resolves_every_key() {
    for key in StorageKey::ALL {
        assert_eq!(StorageKey::from_name(key.as_str()), Some(key));
    }
}

#[test]
fn storage_key_from_name_rejects_unknown() {
    assert_eq!(StorageKey::from_name("session_token"), None);
    assert_eq!(StorageKey::from_name(""), None);
}

#[test]
fn session_keys_exclude_legacy_token() {
    assert!(!StorageKey::SESSION.contains(&StorageKey::LegacyToken));
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(StorageKey::AdminToken), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set(StorageKey::AdminToken, "t1");
    assert_eq!(store.get(StorageKey::AdminToken).as_deref(), Some("t1"));
    assert!(store.contains(StorageKey::AdminToken));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::new();
    store.set(StorageKey::User, "a");
    store.set(StorageKey::User, "b");
    assert_eq!(store.get(StorageKey::User).as_deref(), Some("b"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_accepts_unvalidated_values() {
    let store = MemoryStore::new();
    store.set(StorageKey::User, "{not valid json");
    assert_eq!(store.get(StorageKey::User).as_deref(), Some("{not valid json"));
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::with_entries([(StorageKey::RefreshToken, "r1")]);
    store.remove(StorageKey::RefreshToken);
    store.remove(StorageKey::RefreshToken);
    assert!(!store.contains(StorageKey::RefreshToken));
}

#[test]
fn memory_store_with_entries_populates_all() {
    let store = MemoryStore::with_entries([(StorageKey::AdminToken, "t1"), (StorageKey::LegacyToken, "old")]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(StorageKey::LegacyToken).as_deref(), Some("old"));
}
