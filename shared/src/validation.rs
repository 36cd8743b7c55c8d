//! Validation rules for employee records
//!
//! Centralized limits and validation functions, applied by the edit form
//! before a save is enabled and re-applied by the update endpoint on every
//! write. The limits match the entry constraints of the edit form.

use crate::models::EmployeeUpdate;
use thiserror::Error;

// ── Field limits ────────────────────────────────────────────────────

/// Text fields: full_name, post, address.
pub const MAX_TEXT_LEN: usize = 30;

/// Age bounds (inclusive).
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;

/// Tax id must be exactly this many digits.
pub const TAX_ID_DIGITS: u32 = 12;

const TAX_ID_MIN: u64 = 100_000_000_000; // 10^11, smallest 12-digit number
const TAX_ID_MAX: u64 = 999_999_999_999;

/// Validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("age must be between {MIN_AGE} and {MAX_AGE}")]
    AgeOutOfRange,

    #[error("tax_id must be exactly {TAX_ID_DIGITS} digits")]
    InvalidTaxId,

    #[error("tax_id is required when has_tax_id is set")]
    MissingTaxId,
}

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-blank and within the text limit.
pub fn validate_required_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            len: value.chars().count(),
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// Validate the age bounds.
pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    Ok(())
}

/// Validate the tax id against the flag.
///
/// With the flag set, the value must be present and exactly 12 digits.
/// Without the flag the value is ignored here; writes derive it to `None`.
pub fn validate_tax_id(has_tax_id: bool, tax_id: Option<u64>) -> Result<(), ValidationError> {
    if !has_tax_id {
        return Ok(());
    }
    match tax_id {
        None => Err(ValidationError::MissingTaxId),
        Some(v) if (TAX_ID_MIN..=TAX_ID_MAX).contains(&v) => Ok(()),
        Some(_) => Err(ValidationError::InvalidTaxId),
    }
}

/// Validate a full update payload. Used by both the edit form gate and the
/// update endpoint.
pub fn validate_update(update: &EmployeeUpdate) -> Result<(), ValidationError> {
    validate_required_text(&update.full_name, "full_name")?;
    validate_required_text(&update.post, "post")?;
    validate_required_text(&update.address, "address")?;
    validate_age(update.age)?;
    validate_tax_id(update.has_tax_id, update.tax_id)?;
    Ok(())
}
