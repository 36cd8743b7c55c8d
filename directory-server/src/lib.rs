//! Directory Server - HTTP backend for the employee directory
//!
//! # Module structure
//!
//! ```text
//! directory-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # JSON-file store and repository
//! └── utils/         # Error types, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use db::{EmployeeRepository, JsonStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
