//! Table session flows against a scripted API.

use async_trait::async_trait;
use directory_client::{
    ClientError, ClientResult, DirectoryApi, EmployeeEditor, ScrollLoader, Viewport,
};
use shared::{Employee, EmployeeUpdate, PAGE_SIZE};
use std::collections::HashMap;
use std::sync::Mutex;

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

/// In-memory stand-in for the server, counting calls per page.
struct ScriptedApi {
    records: Mutex<Vec<Employee>>,
    fetch_counts: Mutex<HashMap<u32, usize>>,
    update_count: Mutex<usize>,
    /// Fail this many fetches before starting to answer
    fail_first: Mutex<usize>,
}

impl ScriptedApi {
    fn with_records(count: i64) -> Self {
        Self {
            records: Mutex::new((0..count).map(sample).collect()),
            fetch_counts: Mutex::new(HashMap::new()),
            update_count: Mutex::new(0),
            fail_first: Mutex::new(0),
        }
    }

    fn failing_first(count: i64, failures: usize) -> Self {
        let api = Self::with_records(count);
        *api.fail_first.lock().unwrap() = failures;
        api
    }

    fn fetch_count(&self, page: u32) -> usize {
        self.fetch_counts.lock().unwrap().get(&page).copied().unwrap_or(0)
    }
}

#[async_trait]
impl DirectoryApi for ScriptedApi {
    async fn fetch_page(&self, page: u32) -> ClientResult<Vec<Employee>> {
        *self.fetch_counts.lock().unwrap().entry(page).or_insert(0) += 1;

        let mut fail = self.fail_first.lock().unwrap();
        if *fail > 0 {
            *fail -= 1;
            return Err(ClientError::Server("backend down".into()));
        }

        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .skip(page as usize * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect())
    }

    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> ClientResult<Employee> {
        *self.update_count.lock().unwrap() += 1;

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Employee {id} not found")))?;
        record.apply(update.clone());
        Ok(record.clone())
    }
}

fn bottomed() -> Viewport {
    Viewport {
        scroll_top: 900.0,
        client_height: 300.0,
        scroll_height: 1200.0,
    }
}

#[tokio::test]
async fn scrolling_loads_every_page_exactly_once() {
    let api = ScriptedApi::with_records(20);
    let mut loader = ScrollLoader::new();

    assert_eq!(loader.load_initial(&api).await, 15);
    assert_eq!(loader.on_scroll(bottomed(), &api).await, 5);
    // Page 2 is empty: exhaustion
    assert_eq!(loader.on_scroll(bottomed(), &api).await, 0);
    assert!(loader.cache().is_exhausted());

    // Further scroll events issue no more requests
    loader.on_scroll(bottomed(), &api).await;
    loader.on_scroll(bottomed(), &api).await;

    assert_eq!(loader.records().len(), 20);
    assert_eq!(api.fetch_count(0), 1);
    assert_eq!(api.fetch_count(1), 1);
    assert_eq!(api.fetch_count(2), 1);
    assert_eq!(api.fetch_count(3), 0);
}

#[tokio::test]
async fn scroll_away_from_bottom_is_a_noop() {
    let api = ScriptedApi::with_records(20);
    let mut loader = ScrollLoader::new();
    loader.load_initial(&api).await;

    let top = Viewport {
        scroll_top: 0.0,
        client_height: 300.0,
        scroll_height: 1200.0,
    };
    assert_eq!(loader.on_scroll(top, &api).await, 0);
    assert_eq!(api.fetch_count(1), 0);
}

#[tokio::test]
async fn failed_load_is_retried_on_next_trigger() {
    let api = ScriptedApi::failing_first(20, 1);
    let mut loader = ScrollLoader::new();

    // First attempt fails silently; the loader stays retryable
    assert_eq!(loader.load_initial(&api).await, 0);
    assert!(!loader.cache().is_exhausted());

    // The retry asks for the same page again
    assert_eq!(loader.on_scroll(bottomed(), &api).await, 15);
    assert_eq!(api.fetch_count(0), 2);
    assert_eq!(loader.records().len(), 15);
}

#[tokio::test]
async fn saved_record_is_reconciled_into_the_cache() {
    let api = ScriptedApi::with_records(20);
    let mut loader = ScrollLoader::new();
    loader.load_initial(&api).await;

    let selected = loader.records()[3].clone();
    let mut editor = EmployeeEditor::new(selected);
    editor.set_full_name("Renamed Person");
    assert!(editor.is_valid());

    let saved = editor.save(&api).await.unwrap();
    loader.apply_update(saved);

    assert_eq!(loader.records()[3].full_name, "Renamed Person");
    // The backing collection was updated too
    let from_server = api.fetch_page(0).await.unwrap();
    assert_eq!(from_server[3].full_name, "Renamed Person");
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_network() {
    let api = ScriptedApi::with_records(5);
    let mut editor = EmployeeEditor::new(sample(1));
    editor.set_full_name("");

    let result = editor.save(&api).await;
    assert!(matches!(result, Err(ClientError::Validation(_))));
    assert_eq!(*api.update_count.lock().unwrap(), 0);
}

#[tokio::test]
async fn save_failure_keeps_the_draft() {
    let api = ScriptedApi::with_records(5);
    // Editing a record the server does not know
    let mut editor = EmployeeEditor::new(sample(42));
    editor.set_full_name("Ghost");

    let result = editor.save(&api).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
    // Draft survives for a retry
    assert_eq!(editor.full_name(), "Ghost");
}
