//! Employee Model

use serde::{Deserialize, Serialize};

/// Number of records returned per listing page.
pub const PAGE_SIZE: usize = 15;

/// A single employee record as stored and served.
///
/// `id` is assigned at creation and immutable. `tax_id` is `Some` only when
/// `has_tax_id` is true; the server re-derives this on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub post: String,
    pub address: String,
    pub age: u32,
    pub salary: f64,
    /// Absent in older documents; treated as false.
    #[serde(default)]
    pub has_tax_id: bool,
    pub tax_id: Option<u64>,
}

/// Update payload. The mutable field set of [`Employee`].
///
/// Unknown fields in an incoming body are ignored by serde; `id` is never
/// accepted from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub full_name: String,
    pub post: String,
    pub address: String,
    pub age: u32,
    pub salary: f64,
    #[serde(default)]
    pub has_tax_id: bool,
    #[serde(default)]
    pub tax_id: Option<u64>,
}

impl Employee {
    /// Replace the mutable fields with the update payload.
    ///
    /// `tax_id` is forced to `None` whenever `has_tax_id` is false,
    /// regardless of what the payload carries.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        self.full_name = update.full_name;
        self.post = update.post;
        self.address = update.address;
        self.age = update.age;
        self.salary = update.salary;
        self.has_tax_id = update.has_tax_id;
        self.tax_id = if update.has_tax_id {
            update.tax_id
        } else {
            None
        };
    }
}
