//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the admin session core for the lifetime of the app; `auth`
//! is the reactive mirror of its current-user stream that views render from.

pub mod auth;
pub mod session;
