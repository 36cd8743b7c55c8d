use crate::core::Config;
use crate::db::JsonStore;
use crate::utils::AppResult;
use std::sync::Arc;

/// Server state - shared references handed to every handler
///
/// Cloning is shallow; the store and config are behind `Arc`.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: JsonStore,
}

impl ServerState {
    /// Build the state and verify the backing document is readable.
    ///
    /// Startup fails fast on a missing or unparseable document instead of
    /// serving 500s for every request.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let store = JsonStore::new(&config.data_file);
        let records = store.load().await?;
        tracing::info!(
            count = records.len(),
            path = %config.data_file.display(),
            "employee document loaded"
        );

        Ok(Self {
            config: Arc::new(config.clone()),
            store,
        })
    }

    /// Test constructor: state over an existing store, default config.
    pub fn with_store(store: JsonStore) -> Self {
        Self {
            config: Arc::new(Config::default()),
            store,
        }
    }
}
