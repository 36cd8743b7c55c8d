//! Database layer
//!
//! The "database" is a single JSON document holding the full employee
//! collection in order. [`JsonStore`] owns reading and rewriting that
//! document; [`EmployeeRepository`] provides the paging and update
//! operations on top of it.

pub mod employee;
pub mod store;

pub use employee::EmployeeRepository;
pub use store::JsonStore;

use shared::ValidationError;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
