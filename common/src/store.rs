//! Content store contract
//!
//! A store is a single durable slot holding the whole project list as JSON.
//! Backends only move strings; the JSON codec lives here.

use crate::error::Result;
use crate::types::PortfolioProject;

pub trait ContentStore {
    /// Raw payload, `None` when nothing has been saved yet
    fn read(&self) -> Result<Option<String>>;

    /// Replace the payload
    fn write(&mut self, payload: &str) -> Result<()>;

    /// Decoded project list, `None` when the slot is empty
    fn load(&self) -> Result<Option<Vec<PortfolioProject>>> {
        match self.read()? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Full-list write
    fn save(&mut self, projects: &[PortfolioProject]) -> Result<()> {
        let payload = serde_json::to_string(projects)?;
        self.write(&payload)
    }
}

/// In-memory slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payload: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            writes: 0,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Number of writes since creation
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ContentStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        self.payload = Some(payload.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_projects;

    #[test]
    fn test_memory_store_empty() {
        let store = MemoryStore::new();
        assert!(store.load().expect("load failed").is_none());
    }

    #[test]
    fn test_memory_store_save_and_load() {
        let projects = seed_projects();
        let mut store = MemoryStore::new();
        store.save(&projects).expect("save failed");

        let loaded = store.load().expect("load failed").expect("payload missing");
        assert_eq!(loaded, projects);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_memory_store_corrupt_payload() {
        let store = MemoryStore::with_payload("{not json");
        assert!(store.load().is_err());
    }

    #[test]
    fn test_payload_is_json_array() {
        let mut store = MemoryStore::new();
        store.save(&[]).unwrap();
        assert_eq!(store.payload(), Some("[]"));
    }
}
