//! Metadata persistence backends

use crate::metadata::MetadataBackend;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use veranda_core::types::LeadId;
use veranda_core::{Error, LeadMetadata, Result};

/// Volatile backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<LeadId, LeadMetadata>>,
}

impl MemoryBackend {
    /// Backend pre-seeded with existing entries
    #[must_use]
    pub fn with_entries(entries: HashMap<LeadId, LeadMetadata>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl MetadataBackend for MemoryBackend {
    fn load(&self) -> Result<HashMap<LeadId, LeadMetadata>> {
        Ok(self.entries.lock().clone())
    }

    fn persist(&self, entries: &HashMap<LeadId, LeadMetadata>) -> Result<()> {
        *self.entries.lock() = entries.clone();
        Ok(())
    }
}

/// Backend storing the whole mapping as one JSON document on disk
///
/// The production analogue of the dashboard's single browser-storage key:
/// read once at open, rewritten wholesale per mutation.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend over the given file path; the file need not exist yet
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl MetadataBackend for JsonFileBackend {
    fn load(&self) -> Result<HashMap<LeadId, LeadMetadata>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(Error::from)
    }

    fn persist(&self, entries: &HashMap<LeadId, LeadMetadata>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw).map_err(Error::from)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::metadata::MetadataStore;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use veranda_core::{LeadStatus, MetadataPatch};

    #[test]
    fn test_json_backend_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("meta.json"));

        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_backend_persist_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("meta.json");

        let store = MetadataStore::open(Box::new(JsonFileBackend::new(&path)));
        store
            .update("lead-1", MetadataPatch::with_status(LeadStatus::Contacted))
            .unwrap();
        store.append_note("lead-1", "visited on sunday").unwrap();

        // A fresh store over the same file sees the persisted entries
        let reopened = MetadataStore::open(Box::new(JsonFileBackend::new(&path)));
        let metadata = reopened.get("lead-1");
        assert_eq!(metadata.status, LeadStatus::Contacted);
        assert_eq!(metadata.notes.len(), 1);
        assert_eq!(metadata.notes[0].text, "visited on sunday");
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("meta.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let backend = JsonFileBackend::new(&path);
        assert!(backend.load().is_err());

        // The store swallows the corruption and starts empty
        let store = MetadataStore::open(Box::new(backend));
        assert!(store.snapshot().is_empty());

        // The next mutation overwrites the corrupt file
        store
            .update("lead-1", MetadataPatch::with_status(LeadStatus::Closed))
            .unwrap();
        let reopened = MetadataStore::open(Box::new(JsonFileBackend::new(&path)));
        assert_eq!(reopened.get("lead-1").status, LeadStatus::Closed);
    }

    #[test]
    fn test_json_backend_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("meta.json");

        let backend = JsonFileBackend::new(&path);
        backend.persist(&HashMap::new()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::default();
        let mut entries = HashMap::new();
        entries.insert("lead-1".to_string(), LeadMetadata::default());

        backend.persist(&entries).unwrap();
        assert_eq!(backend.load().unwrap(), entries);
    }
}
