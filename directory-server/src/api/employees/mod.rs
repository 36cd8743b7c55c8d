//! Employee API Module

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

/// Employee router
///
/// | Path | Method | Description |
/// |------|--------|-------------|
/// | /users | GET | One page of employees, `?start=<page index>` |
/// | /users/{id} | PUT | Replace the mutable fields of one employee |
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list))
        .route("/users/{id}", put(handler::update))
}
