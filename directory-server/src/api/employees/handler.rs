//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::EmployeeRepository;
use crate::utils::{AppError, AppResult};
use shared::{Employee, EmployeeUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Zero-based page index. Parsed by hand so a missing, negative or
    /// non-numeric value is a 400 with a stable message rather than an
    /// extractor rejection.
    start: Option<String>,
}

fn parse_page(query: &ListQuery) -> AppResult<u32> {
    query
        .start
        .as_deref()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| {
            AppError::InvalidArgument(
                "Invalid start parameter. Must be a non-negative number.".to_string(),
            )
        })
}

/// List one page of employees in stored order.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let page = parse_page(&query)?;
    let repo = EmployeeRepository::new(state.store.clone());
    let employees = repo.find_page(page).await?;
    Ok(Json(employees))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.store.clone());
    let employee = repo.update(id, payload).await?;
    Ok(Json(employee))
}
