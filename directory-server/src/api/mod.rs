//! API route modules
//!
//! - [`health`] - liveness probe
//! - [`employees`] - paginated listing and single-record update

pub mod employees;
pub mod health;
