use super::*;
use admin_session::{HttpRequest, HttpResponse, MemoryStore, StorageKey};
use serde_json::json;
use std::sync::Mutex;

/// Transport answering from a script, first entry first.
struct Scripted {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
}

impl Scripted {
    fn new(mut responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        responses.reverse();
        Self { responses: Mutex::new(responses) }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for Scripted {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Ok(HttpResponse { status: 204, body: Value::Null }))
    }
}

fn ok(body: Value) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse { status: 200, body })
}

fn status(status: u16) -> Result<HttpResponse, HttpError> {
    Err(HttpError::Status { status, message: format!("HTTP {status}") })
}

fn signed_in() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_entries([
        (StorageKey::AdminToken, "t1"),
        (StorageKey::RefreshToken, "r1"),
        (StorageKey::User, r#"{"username":"alice","name":"Alice Admin"}"#),
    ]))
}

fn service(store: Arc<MemoryStore>, responses: Vec<Result<HttpResponse, HttpError>>) -> AuthService<Scripted> {
    let session = SessionContext::new(store);
    AuthService::new(session, Scripted::new(responses), SessionConfig::default())
}

fn guard_over(store: Arc<MemoryStore>) -> RouteGuard {
    RouteGuard::new(SessionContext::new(store), Arc::new(LogNavigator), "/admin/login")
}

// =============================================================
// argument parsing
// =============================================================

#[test]
fn parses_request_with_method_and_data() {
    let cli = Cli::try_parse_from([
        "admin-cli",
        "request",
        "post",
        "/stories",
        "--data",
        r#"{"title":"Spring appeal"}"#,
    ])
    .unwrap();

    match cli.command {
        Command::Request { method, path, data } => {
            assert_eq!(method, Method::Post);
            assert_eq!(path, "/stories");
            assert_eq!(data.as_deref(), Some(r#"{"title":"Spring appeal"}"#));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_http_method() {
    assert!(Cli::try_parse_from(["admin-cli", "request", "TRACE", "/stories"]).is_err());
}

#[test]
fn rejects_zero_timeout() {
    assert!(Cli::try_parse_from(["admin-cli", "--timeout-secs", "0", "whoami"]).is_err());
}

#[test]
fn parses_guard_path() {
    let cli = Cli::try_parse_from(["admin-cli", "--session-file", "/tmp/s.json", "guard", "/admin/events"]).unwrap();
    assert_eq!(cli.session_file, PathBuf::from("/tmp/s.json"));
    assert!(matches!(cli.command, Command::Guard { ref path } if path == "/admin/events"));
}

// =============================================================
// session_config
// =============================================================

#[test]
fn flags_override_environment() {
    let cli = Cli::try_parse_from([
        "admin-cli",
        "--api-url",
        "https://charity.example/api/",
        "--timeout-secs",
        "5",
        "whoami",
    ])
    .unwrap();
    let env = |key: &str| match key {
        "ADMIN_API_URL" => Some("http://ignored/api".to_owned()),
        "ADMIN_LOGIN_ROUTE" => Some("/staff/login".to_owned()),
        _ => None,
    };

    let config = session_config(&cli, SessionConfig::from_lookup(env).unwrap()).unwrap();

    assert_eq!(config.api_url, "https://charity.example/api");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.login_route, "/staff/login");
}

#[test]
fn blank_api_url_flag_is_a_config_error() {
    let cli = Cli::try_parse_from(["admin-cli", "--api-url", "  ", "whoami"]).unwrap();

    assert!(matches!(session_config(&cli, SessionConfig::default()), Err(ConfigError::Empty { .. })));
}

// =============================================================
// commands
// =============================================================

#[tokio::test]
async fn login_reports_display_name_and_persists() {
    let store = Arc::new(MemoryStore::new());
    let auth = service(
        Arc::clone(&store),
        vec![ok(json!({
            "access_token": "t9",
            "refresh_token": "r9",
            "user": {"username": "bob", "name": "Bob Trustee"}
        }))],
    );

    let out = run_login(&auth, "bob", "pw").await.unwrap();

    assert_eq!(out, "signed in as Bob Trustee");
    assert_eq!(store.get(StorageKey::AdminToken).as_deref(), Some("t9"));
}

#[tokio::test]
async fn failed_login_is_an_http_error() {
    let auth = service(Arc::new(MemoryStore::new()), vec![status(401)]);

    let err = run_login(&auth, "bob", "wrong").await.unwrap_err();

    assert!(matches!(err, CliError::Http(HttpError::Status { status: 401, .. })));
}

#[tokio::test]
async fn logout_clears_session_even_when_server_fails() {
    let store = signed_in();
    let auth = service(Arc::clone(&store), vec![Err(HttpError::Transport("refused".to_owned()))]);

    assert_eq!(run_logout(&auth).await, "signed out locally");
    assert_eq!(store.get(StorageKey::AdminToken), None);
    assert_eq!(store.get(StorageKey::User), None);
}

#[tokio::test]
async fn logout_success_message() {
    let auth = service(signed_in(), vec![]);
    assert_eq!(run_logout(&auth).await, "signed out");
}

#[test]
fn whoami_prints_restored_user() {
    let auth = service(signed_in(), vec![]);

    let out = run_whoami(&auth).unwrap();
    let printed: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(printed, json!({"username": "alice", "name": "Alice Admin"}));
}

#[test]
fn whoami_without_session_is_not_signed_in() {
    let auth = service(Arc::new(MemoryStore::new()), vec![]);
    assert!(matches!(run_whoami(&auth), Err(CliError::NotSignedIn)));
}

#[test]
fn guard_allows_signed_in_user() {
    assert_eq!(run_guard(&guard_over(signed_in()), "/admin").unwrap(), "allowed: alice");
}

#[test]
fn guard_denial_carries_login_redirect() {
    let err = run_guard(&guard_over(Arc::new(MemoryStore::new())), "/admin/stories").unwrap_err();

    match err {
        CliError::Denied { redirect } => assert_eq!(redirect, "/admin/login?returnUrl=%2Fadmin%2Fstories"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn request_prints_response_body() {
    let auth = service(signed_in(), vec![ok(json!({"id": 7}))]);

    let out = run_request(&auth, Method::Post, "/events", Some(r#"{"title":"Fun run"}"#)).await.unwrap();

    assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), json!({"id": 7}));
}

#[tokio::test]
async fn request_with_invalid_json_is_rejected_before_sending() {
    let auth = service(signed_in(), vec![]);

    let err = run_request(&auth, Method::Post, "/events", Some("{oops")).await.unwrap_err();

    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[tokio::test]
async fn request_401_asks_for_login() {
    let auth = service(signed_in(), vec![status(401)]);

    let err = run_request(&auth, Method::Get, "/stories", None).await.unwrap_err();

    assert!(matches!(err, CliError::Unauthorized(_)));
}

#[tokio::test]
async fn empty_response_prints_nothing() {
    let auth = service(signed_in(), vec![]);
    assert_eq!(run_request(&auth, Method::Delete, "/stories/3", None).await.unwrap(), "");
}
