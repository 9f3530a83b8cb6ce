//! Admin session core shared by the web client and the CLI.
//!
//! This crate owns everything about an authenticated admin that does not
//! depend on where it runs: the persisted key-value session, the typed user
//! payload, the current-user stream, the login/logout service, the route
//! guard, and the HTTP error interceptor chain.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` plugs in `localStorage`, `gloo-net` and the Leptos router;
//! `cli` plugs in a JSON file, `reqwest` and a logging navigator. Both build a
//! [`SessionContext`] once and hand it to the [`AuthService`], the
//! [`RouteGuard`] and the [`StatusDispatch`] interceptor.

pub mod auth;
pub mod config;
pub mod context;
pub mod current_user;
pub mod guard;
pub mod interceptor;
pub mod routes;
pub mod store;
pub mod transport;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthService, LoginResponse};
pub use config::{ConfigError, SessionConfig};
pub use context::SessionContext;
pub use current_user::{CurrentUser, SubscriptionId};
pub use guard::{GuardOutcome, RouteGuard, Verdict};
pub use interceptor::{ClosureHandler, ErrorHandler, Intercepted, InterceptorChain, StatusDispatch};
pub use routes::Navigator;
pub use store::{MemoryStore, SessionStore, StorageKey};
pub use transport::{HttpError, HttpRequest, HttpResponse, Method, Transport};
pub use user::{AdminUser, UserDecodeError};
