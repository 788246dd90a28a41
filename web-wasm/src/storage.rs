//! Browser local-storage content store

use gloo::storage::{LocalStorage, Storage};
use portfolio_common::{ContentStore, Error, Result};

/// Local-storage key holding the serialized project list
pub const STORAGE_KEY: &str = "visela-portfolio-projects";

#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self { key: STORAGE_KEY }
    }

    pub fn with_key(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(self.key)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(self.key, payload)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }
}
