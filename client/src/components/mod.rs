//! Reusable admin UI components.

pub mod admin_header;
pub mod navigation_bridge;
