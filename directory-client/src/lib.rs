//! Directory Client - HTTP client for the directory server
//!
//! Provides network calls to the directory API plus the session-state
//! components a table UI drives: the page cache with its scroll-triggered
//! loader, the edit-form controller, and the persisted column-visibility
//! preferences. The state machines are pure transitions; only
//! [`HttpClient`] touches the network.

pub mod config;
pub mod error;
pub mod http;
pub mod table;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{DirectoryApi, HttpClient};
pub use table::{Column, ColumnPrefs, EmployeeEditor, LoadState, PageCache, ScrollLoader, Viewport};

// Re-export shared types for convenience
pub use shared::{Employee, EmployeeUpdate};
