//! Shared types for the employee directory
//!
//! Common types used by both the server and the client: the employee data
//! model, the fixed page size, and the validation rules. Validation lives
//! here so the server enforces exactly the same constraints the edit form
//! checks — server-side enforcement must not depend on client cooperation.

pub mod models;
pub mod validation;

// Re-exports
pub use models::{Employee, EmployeeUpdate, PAGE_SIZE};
pub use validation::ValidationError;
