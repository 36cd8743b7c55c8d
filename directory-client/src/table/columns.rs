//! Column visibility preferences
//!
//! Persisted per-user show/hide flags for the table columns, one JSON file
//! under the client work dir. Loading tolerates a missing or unparseable
//! file by falling back to the all-visible default; saving happens only on
//! an explicit apply.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name under the preferences directory
pub const PREFS_FILE: &str = "columns.json";

fn default_visible() -> bool {
    true
}

/// A table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    FullName,
    Post,
    Address,
    Age,
    Salary,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::FullName,
        Column::Post,
        Column::Address,
        Column::Age,
        Column::Salary,
    ];
}

/// Per-column visibility, defaulting to all-visible.
///
/// Serialized with one key per column so a file written by an older build
/// that lacks a column simply shows that column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPrefs {
    #[serde(default = "default_visible")]
    pub id: bool,
    #[serde(default = "default_visible")]
    pub full_name: bool,
    #[serde(default = "default_visible")]
    pub post: bool,
    #[serde(default = "default_visible")]
    pub address: bool,
    #[serde(default = "default_visible")]
    pub age: bool,
    #[serde(default = "default_visible")]
    pub salary: bool,
}

impl Default for ColumnPrefs {
    fn default() -> Self {
        Self {
            id: true,
            full_name: true,
            post: true,
            address: true,
            age: true,
            salary: true,
        }
    }
}

impl ColumnPrefs {
    pub fn is_visible(&self, column: Column) -> bool {
        match column {
            Column::Id => self.id,
            Column::FullName => self.full_name,
            Column::Post => self.post,
            Column::Address => self.address,
            Column::Age => self.age,
            Column::Salary => self.salary,
        }
    }

    pub fn toggle(&mut self, column: Column) {
        let flag = match column {
            Column::Id => &mut self.id,
            Column::FullName => &mut self.full_name,
            Column::Post => &mut self.post,
            Column::Address => &mut self.address,
            Column::Age => &mut self.age,
            Column::Salary => &mut self.salary,
        };
        *flag = !*flag;
    }

    /// Load preferences from `dir`, falling back to the default when the
    /// file is missing or does not parse.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(PREFS_FILE);
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()))
        {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed column preferences, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the preferences (the explicit apply action).
    pub fn save(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self).expect("prefs serialize");
        std::fs::write(dir.join(PREFS_FILE), content)
    }
}
