use anyhow::Result;
use evreg_core::{CsvStore, EventStore, config};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: CsvStore,
}

impl AppState {
    /// Resolve the configured data file and make sure it carries the header.
    pub fn new() -> Result<Self> {
        let store = CsvStore::new(config::data_file_path()?);
        store.ensure_initialized()?;
        log::info!("Using data file {}", store.path().display());
        Ok(AppState { store })
    }

    /// Build state over an explicit store.
    #[cfg(test)]
    pub fn with_store(store: CsvStore) -> Self {
        AppState { store }
    }

    pub fn store(&self) -> &CsvStore {
        &self.store
    }
}
