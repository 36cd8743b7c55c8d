//! Edit form controller
//!
//! Holds a draft copy of one employee. Setters enforce the entry-time
//! limits (a text field never grows past 30 chars, age input above 100 and
//! tax-id input beyond 12 digits are dropped): offending input is rejected
//! at the keystroke, not just at submit. `is_valid` recomputes the save
//! gate from the shared validation rules on the current draft.

use crate::http::DirectoryApi;
use crate::{ClientError, ClientResult};
use shared::validation::{self, MAX_AGE, MAX_TEXT_LEN, TAX_ID_DIGITS};
use shared::{Employee, EmployeeUpdate};

#[derive(Debug, Clone)]
pub struct EmployeeEditor {
    original: Employee,
    full_name: String,
    post: String,
    address: String,
    age: u32,
    salary: f64,
    has_tax_id: bool,
    /// Digits typed so far; empty when the record has no tax id
    tax_id: String,
}

impl EmployeeEditor {
    /// Open an editor over the selected employee.
    pub fn new(employee: Employee) -> Self {
        let mut editor = Self {
            full_name: String::new(),
            post: String::new(),
            address: String::new(),
            age: 0,
            salary: 0.0,
            has_tax_id: false,
            tax_id: String::new(),
            original: employee,
        };
        editor.reset();
        editor
    }

    /// Reload the draft from the original record.
    pub fn reset(&mut self) {
        self.full_name = self.original.full_name.clone();
        self.post = self.original.post.clone();
        self.address = self.original.address.clone();
        self.age = self.original.age;
        self.salary = self.original.salary;
        self.has_tax_id = self.original.has_tax_id;
        self.tax_id = self
            .original
            .tax_id
            .map(|v| v.to_string())
            .unwrap_or_default();
    }

    pub fn original(&self) -> &Employee {
        &self.original
    }

    // ── Field entry (input-level constraints) ───────────────────────

    /// Accepts up to [`MAX_TEXT_LEN`] chars; longer input is dropped.
    pub fn set_full_name(&mut self, value: &str) {
        if value.chars().count() <= MAX_TEXT_LEN {
            self.full_name = value.to_string();
        }
    }

    pub fn set_post(&mut self, value: &str) {
        if value.chars().count() <= MAX_TEXT_LEN {
            self.post = value.to_string();
        }
    }

    pub fn set_address(&mut self, value: &str) {
        if value.chars().count() <= MAX_TEXT_LEN {
            self.address = value.to_string();
        }
    }

    /// Entry above [`MAX_AGE`] is dropped; values below the minimum are
    /// accepted here and caught by [`is_valid`](Self::is_valid).
    pub fn set_age(&mut self, value: u32) {
        if value <= MAX_AGE {
            self.age = value;
        }
    }

    pub fn set_salary(&mut self, value: f64) {
        self.salary = value;
    }

    pub fn set_has_tax_id(&mut self, value: bool) {
        self.has_tax_id = value;
    }

    /// Accepts only digit strings up to [`TAX_ID_DIGITS`] chars.
    pub fn set_tax_id(&mut self, value: &str) {
        if value.chars().count() <= TAX_ID_DIGITS as usize
            && value.chars().all(|c| c.is_ascii_digit())
        {
            self.tax_id = value.to_string();
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    // ── Save gate ───────────────────────────────────────────────────

    /// The draft as an update payload. `tax_id` is already nulled when the
    /// flag is off.
    pub fn draft(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            full_name: self.full_name.clone(),
            post: self.post.clone(),
            address: self.address.clone(),
            age: self.age,
            salary: self.salary,
            has_tax_id: self.has_tax_id,
            tax_id: if self.has_tax_id {
                self.tax_id.parse().ok()
            } else {
                None
            },
        }
    }

    /// Whether Save is enabled. Recomputed from the shared rules on every
    /// call, so it always reflects the current draft.
    pub fn is_valid(&self) -> bool {
        validation::validate_update(&self.draft()).is_ok()
    }

    /// Submit the draft.
    ///
    /// An invalid draft never reaches the network. On success the canonical
    /// record is returned for cache reconciliation and becomes the new
    /// original; on failure the draft is kept for the user to retry.
    pub async fn save(&mut self, api: &impl DirectoryApi) -> ClientResult<Employee> {
        let draft = self.draft();
        if let Err(e) = validation::validate_update(&draft) {
            return Err(ClientError::Validation(e.to_string()));
        }

        let saved = api.update_employee(self.original.id, &draft).await?;
        self.original = saved.clone();
        Ok(saved)
    }
}
