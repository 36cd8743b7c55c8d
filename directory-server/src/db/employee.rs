//! Employee Repository

use super::{JsonStore, StoreError, StoreResult};
use shared::{Employee, EmployeeUpdate, PAGE_SIZE, validation};

#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    store: JsonStore,
}

impl EmployeeRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Return page `page` of the collection in stored order.
    ///
    /// Pages are fixed at [`PAGE_SIZE`] records. A page past the end of the
    /// collection is the empty vec, which callers treat as the exhaustion
    /// signal.
    pub async fn find_page(&self, page: u32) -> StoreResult<Vec<Employee>> {
        let records = self.store.load().await?;
        let start = (page as usize).saturating_mul(PAGE_SIZE);
        Ok(records.into_iter().skip(start).take(PAGE_SIZE).collect())
    }

    /// Find one employee by id.
    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Employee>> {
        let records = self.store.load().await?;
        Ok(records.into_iter().find(|e| e.id == id))
    }

    /// Validate and apply an update, persisting before returning.
    ///
    /// The record keeps its position in the collection. `tax_id` is derived
    /// from `has_tax_id` server-side, whatever the payload carried. Any
    /// failure leaves the stored document untouched.
    pub async fn update(&self, id: i64, update: EmployeeUpdate) -> StoreResult<Employee> {
        validation::validate_update(&update)?;

        let _guard = self.store.lock_writes().await;

        let mut records = self.store.load().await?;
        let record = records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Employee {} not found", id)))?;

        record.apply(update);
        let updated = record.clone();

        self.store.save(&records).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64) -> Employee {
        Employee {
            id,
            full_name: format!("Employee {id}"),
            post: "Engineer".into(),
            address: "12 Oak Street".into(),
            age: 30,
            salary: 1000.0,
            has_tax_id: false,
            tax_id: None,
        }
    }

    fn update() -> EmployeeUpdate {
        EmployeeUpdate {
            full_name: "A".into(),
            post: "B".into(),
            address: "C".into(),
            age: 40,
            salary: 1000.0,
            has_tax_id: false,
            tax_id: Some(999999999999),
        }
    }

    async fn seeded_repo(count: i64) -> (tempfile::TempDir, EmployeeRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("users.json"));
        let records: Vec<_> = (0..count).map(sample).collect();
        store.save(&records).await.unwrap();
        (dir, EmployeeRepository::new(store))
    }

    #[tokio::test]
    async fn pages_slice_the_collection_in_order() {
        let (_dir, repo) = seeded_repo(20).await;

        let page0 = repo.find_page(0).await.unwrap();
        assert_eq!(page0.len(), 15);
        assert_eq!(page0[0].id, 0);
        assert_eq!(page0[14].id, 14);

        let page1 = repo.find_page(1).await.unwrap();
        assert_eq!(page1.len(), 5);
        assert_eq!(page1[0].id, 15);

        assert!(repo.find_page(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_page_exactly_at_collection_end() {
        let (_dir, repo) = seeded_repo(15).await;
        assert_eq!(repo.find_page(0).await.unwrap().len(), 15);
        assert!(repo.find_page(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (_dir, repo) = seeded_repo(3).await;
        assert!(matches!(
            repo.update(42, update()).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_derives_null_tax_id() {
        let (_dir, repo) = seeded_repo(3).await;
        // Payload carries a tax id but the flag is off
        let updated = repo.update(1, update()).await.unwrap();
        assert_eq!(updated.tax_id, None);

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.tax_id, None);
        assert_eq!(stored.full_name, "A");
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let (_dir, repo) = seeded_repo(3).await;
        let first = repo.update(1, update()).await.unwrap();
        let second = repo.update(1, update()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap(), second);
    }

    #[tokio::test]
    async fn update_keeps_record_position() {
        let (_dir, repo) = seeded_repo(5).await;
        repo.update(2, update()).await.unwrap();

        let page = repo.find_page(0).await.unwrap();
        let ids: Vec<_> = page.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn invalid_update_is_rejected_and_not_persisted() {
        let (_dir, repo) = seeded_repo(3).await;
        let mut bad = update();
        bad.age = 17;
        assert!(matches!(
            repo.update(1, bad).await,
            Err(StoreError::Validation(_))
        ));

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.age, 30);
    }

    #[tokio::test]
    async fn concurrent_updates_both_land() {
        let (_dir, repo) = seeded_repo(20).await;

        let a = repo.clone();
        let b = repo.clone();
        let mut upd_a = update();
        upd_a.full_name = "First".into();
        let mut upd_b = update();
        upd_b.full_name = "Second".into();

        let (ra, rb) = tokio::join!(a.update(0, upd_a), b.update(19, upd_b));
        ra.unwrap();
        rb.unwrap();

        // The writer lock serializes the rewrites, so neither update is lost
        assert_eq!(repo.find_by_id(0).await.unwrap().unwrap().full_name, "First");
        assert_eq!(repo.find_by_id(19).await.unwrap().unwrap().full_name, "Second");
    }
}
