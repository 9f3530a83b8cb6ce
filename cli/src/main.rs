//! Command-line client for the admin content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the same session core as the web admin, with a JSON file in place of
//! `localStorage` and a logging navigator in place of the router. A session
//! created by `login` is reused by later `whoami`, `guard` and `request`
//! invocations until `logout` clears it or the server rejects it.

mod navigator;
mod store;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use admin_session::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use admin_session::{
    AuthService, ConfigError, GuardOutcome, HttpError, Intercepted, InterceptorChain, Method, Navigator, RouteGuard,
    SessionConfig, SessionContext, SessionStore, StatusDispatch, Transport,
};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::navigator::LogNavigator;
use crate::store::FileStore;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("session rejected by the server ({0}); run `admin-cli login`")]
    Unauthorized(HttpError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("not signed in; run `admin-cli login`")]
    NotSignedIn,
    #[error("access denied; sign in at {redirect}")]
    Denied { redirect: String },
}

#[derive(Parser, Debug)]
#[command(name = "admin-cli", about = "Admin session and content API CLI")]
struct Cli {
    #[arg(long, env = "ADMIN_API_URL", default_value = "http://127.0.0.1:3000/api")]
    api_url: String,

    #[arg(long, env = "ADMIN_SESSION_FILE", default_value = ".admin-session.json")]
    session_file: PathBuf,

    #[arg(
        long,
        env = "ADMIN_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session.
    Login {
        #[arg(long, env = "ADMIN_USERNAME")]
        username: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out on the server and clear the local session.
    Logout,
    /// Print the signed-in user.
    Whoami,
    /// Check whether an admin route would be allowed.
    Guard { path: String },
    /// Send an authenticated request to an API path.
    Request {
        method: Method,
        path: String,
        #[arg(long)]
        data: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let output = run(cli).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let config = session_config(&cli, SessionConfig::from_env()?)?;
    let store: Arc<dyn SessionStore> = Arc::new(FileStore::open(&cli.session_file));
    let session = SessionContext::new(store);
    let navigator: Arc<dyn Navigator> = Arc::new(LogNavigator);

    let chain = InterceptorChain::new().with(StatusDispatch::new(
        session.clone(),
        Arc::clone(&navigator),
        config.login_route.clone(),
    ));
    let transport = ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;
    let guard = RouteGuard::new(session.clone(), navigator, config.login_route.clone());
    let auth = AuthService::new(session, Intercepted::new(transport, chain), config);

    dispatch(cli.command, &auth, &guard).await
}

/// Apply the flags on top of the environment-derived `base` config.
fn session_config(cli: &Cli, base: SessionConfig) -> Result<SessionConfig, ConfigError> {
    let mut config = base.with_api_url(&cli.api_url)?;
    config.request_timeout_secs = cli.timeout_secs;
    Ok(config)
}

async fn dispatch<T: Transport>(command: Command, auth: &AuthService<T>, guard: &RouteGuard) -> Result<String, CliError> {
    match command {
        Command::Login { username, password } => run_login(auth, &username, &password).await,
        Command::Logout => Ok(run_logout(auth).await),
        Command::Whoami => run_whoami(auth),
        Command::Guard { path } => run_guard(guard, &path),
        Command::Request { method, path, data } => run_request(auth, method, &path, data.as_deref()).await,
    }
}

async fn run_login<T: Transport>(auth: &AuthService<T>, username: &str, password: &str) -> Result<String, CliError> {
    let response = auth.login(username, password).await?;
    Ok(format!("signed in as {}", response.user.display_name()))
}

async fn run_logout<T: Transport>(auth: &AuthService<T>) -> String {
    match auth.logout().await {
        Ok(()) => "signed out".to_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "server logout failed; local session cleared anyway");
            "signed out locally".to_owned()
        }
    }
}

fn run_whoami<T: Transport>(auth: &AuthService<T>) -> Result<String, CliError> {
    let user = auth.current_user().ok_or(CliError::NotSignedIn)?;
    Ok(serde_json::to_string_pretty(&user)?)
}

fn run_guard(guard: &RouteGuard, path: &str) -> Result<String, CliError> {
    match guard.check(path) {
        GuardOutcome::Allowed(user) => Ok(format!("allowed: {}", user.username)),
        GuardOutcome::Denied { redirect } => Err(CliError::Denied { redirect }),
    }
}

async fn run_request<T: Transport>(
    auth: &AuthService<T>,
    method: Method,
    path: &str,
    data: Option<&str>,
) -> Result<String, CliError> {
    let body = data.map(serde_json::from_str::<Value>).transpose()?;
    match auth.request(method, path, body).await {
        Ok(response) => render(&response.body),
        Err(e) if e.status() == Some(401) => Err(CliError::Unauthorized(e)),
        Err(e) => Err(CliError::Http(e)),
    }
}

fn render(value: &Value) -> Result<String, CliError> {
    if value.is_null() {
        return Ok(String::new());
    }
    Ok(serde_json::to_string_pretty(value)?)
}
