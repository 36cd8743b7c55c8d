//! Table session state
//!
//! The per-session state a table view drives, made explicit:
//!
//! - [`PageCache`] / [`LoadState`] - accumulated pages, cursor, exhaustion
//! - [`ScrollLoader`] / [`Viewport`] - scroll-position trigger and driver
//! - [`EmployeeEditor`] - draft record with live validation
//! - [`ColumnPrefs`] / [`Column`] - persisted column visibility

pub mod cache;
pub mod columns;
pub mod editor;
pub mod loader;

pub use cache::{LoadState, PageCache, PendingLoad};
pub use columns::{Column, ColumnPrefs};
pub use editor::EmployeeEditor;
pub use loader::{ScrollLoader, Viewport};
