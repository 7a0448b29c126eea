//! Metadata overlay store
//!
//! Merges locally-owned mutable annotations (status, notes) onto immutable
//! lead records without touching the records themselves. The whole mapping
//! is held in memory and rewritten wholesale through the backend on every
//! mutation, mirroring a browser-local key-value entry.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::warn;
use veranda_core::types::LeadId;
use veranda_core::{LeadMetadata, MetadataPatch, Note, Result};

/// Persistence adapter for the metadata mapping
///
/// Implementations load the full mapping once at open and rewrite it
/// wholesale on every mutation.
pub trait MetadataBackend: Send + Sync + std::fmt::Debug {
    /// Load the full metadata mapping
    fn load(&self) -> Result<HashMap<LeadId, LeadMetadata>>;

    /// Persist the full metadata mapping
    fn persist(&self, entries: &HashMap<LeadId, LeadMetadata>) -> Result<()>;
}

/// In-memory metadata mapping with write-through persistence
///
/// Entries are created lazily on first mutation for a lead id, never
/// expire, and are never validated against which leads actually exist.
#[derive(Debug)]
pub struct MetadataStore {
    entries: RwLock<HashMap<LeadId, LeadMetadata>>,
    backend: Box<dyn MetadataBackend>,
}

impl MetadataStore {
    /// Open a store over the given backend
    ///
    /// An unreadable or corrupted backend degrades to an empty mapping
    /// with a warning; it never fails the caller.
    #[must_use]
    pub fn open(backend: Box<dyn MetadataBackend>) -> Self {
        let entries = backend.load().unwrap_or_else(|e| {
            warn!("metadata backend unreadable, starting empty: {e}");
            HashMap::new()
        });

        Self {
            entries: RwLock::new(entries),
            backend,
        }
    }

    /// Read the metadata for a lead
    ///
    /// Returns the stored entry, or the empty default (`New`, no notes)
    /// when none exists. Pure read, no side effect.
    #[must_use]
    pub fn get(&self, lead_id: &str) -> LeadMetadata {
        self.entries.read().get(lead_id).cloned().unwrap_or_default()
    }

    /// Merge a shallow patch into a lead's metadata and persist
    ///
    /// The in-memory mapping is updated synchronously; the full mapping is
    /// then written back through the backend. Idempotent.
    pub fn update(&self, lead_id: &str, patch: MetadataPatch) -> Result<()> {
        let snapshot = {
            let mut entries = self.entries.write();
            entries
                .entry(lead_id.to_string())
                .or_default()
                .apply(patch);
            entries.clone()
        };
        self.backend.persist(&snapshot)
    }

    /// Append a dated note to a lead
    ///
    /// A no-op when `text` trims to empty: nothing is stored or persisted.
    pub fn append_note(&self, lead_id: &str, text: &str) -> Result<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let mut notes = self.get(lead_id).notes;
        notes.push(Note {
            text: trimmed.to_string(),
            time: Utc::now(),
        });
        self.update(lead_id, MetadataPatch::with_notes(notes))
    }

    /// Remove the note at `index` from a lead's notes
    ///
    /// A no-op when `index` is out of range: nothing is stored or
    /// persisted, and no entry is created for an unknown lead id.
    pub fn delete_note(&self, lead_id: &str, index: usize) -> Result<()> {
        let mut notes = self.get(lead_id).notes;
        if index >= notes.len() {
            return Ok(());
        }

        notes.remove(index);
        self.update(lead_id, MetadataPatch::with_notes(notes))
    }

    /// Clone of the full mapping, for the derived-analytics functions
    #[must_use]
    pub fn snapshot(&self) -> HashMap<LeadId, LeadMetadata> {
        self.entries.read().clone()
    }
}
