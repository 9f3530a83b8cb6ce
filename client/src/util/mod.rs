//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router and session glue from page logic so pages
//! stay declarative.

pub mod auth;
