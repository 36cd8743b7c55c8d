//! JSON document store
//!
//! One serialized array of employees, read fully on every request and
//! rewritten fully on every update. Writers take an async mutex so two
//! concurrent updates never interleave their read-modify-write cycles;
//! the document is replaced via temp-file-then-rename so readers never
//! observe a partial write.

use super::StoreResult;
use shared::Employee;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Arc::new(path.as_ref().to_path_buf()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the single-writer lock. Held across a full
    /// read-modify-write cycle by updating callers.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read and parse the whole document.
    pub async fn load(&self) -> StoreResult<Vec<Employee>> {
        let content = tokio::fs::read_to_string(self.path.as_ref()).await?;
        let records: Vec<Employee> = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Rewrite the whole document.
    ///
    /// Serializes to a sibling temp file and renames it into place, so a
    /// failure mid-write leaves the previous document intact.
    pub async fn save(&self, records: &[Employee]) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, self.path.as_ref()).await?;
        Ok(())
    }
}
