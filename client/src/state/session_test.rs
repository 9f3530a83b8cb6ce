use super::*;
use admin_session::{MemoryStore, StorageKey};

fn signed_in_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_entries([
        (StorageKey::AdminToken, "t1"),
        (StorageKey::User, r#"{"username":"alice"}"#),
    ]))
}

#[test]
fn new_session_restores_persisted_user() {
    let owner = Owner::new();
    owner.with(|| {
        let session = AdminSession::new(signed_in_store(), SessionConfig::default());
        assert!(session.auth().is_logged_in());
        assert_eq!(session.auth().current_user().map(|u| u.username), Some("alice".to_owned()));
    });
}

#[test]
fn guard_redirect_lands_in_pending_navigation() {
    let owner = Owner::new();
    owner.with(|| {
        let session = AdminSession::new(Arc::new(MemoryStore::new()), SessionConfig::default());

        assert!(!session.guard().can_activate("/admin"));

        assert_eq!(
            session.pending_navigation().get_untracked().as_deref(),
            Some("/admin/login?returnUrl=%2Fadmin")
        );
    });
}

#[test]
fn allowed_navigation_leaves_pending_empty() {
    let owner = Owner::new();
    owner.with(|| {
        let session = AdminSession::new(signed_in_store(), SessionConfig::default());
        assert!(session.guard().can_activate("/admin"));
        assert!(session.pending_navigation().get_untracked().is_none());
    });
}

#[tokio::test]
async fn failed_request_outside_browser_is_forwarded() {
    let owner = Owner::new();
    let session = owner.with(|| AdminSession::new(signed_in_store(), SessionConfig::default()));

    let err = session.auth().login("alice", "pw").await.expect_err("no fetch outside browser");

    assert!(err.status().is_none());
    assert!(session.auth().is_logged_in());
}

#[test]
fn build_config_without_overrides_matches_defaults() {
    // Build-time env is unset in tests.
    if option_env!("ADMIN_API_URL").is_none() {
        assert_eq!(build_config().api_url, SessionConfig::default().api_url);
    }
}
