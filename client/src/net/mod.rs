//! Browser-side adapters for the session core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` backs the session with `localStorage`, `transport` sends API
//! requests with `gloo-net`, and `navigator` hands redirects to the router.

pub mod navigator;
pub mod storage;
pub mod transport;
