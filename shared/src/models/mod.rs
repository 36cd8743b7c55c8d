//! Data models
//!
//! Shared between directory-server and directory-client (via API).

pub mod employee;

// Re-exports
pub use employee::*;
