//! Lead repository backing the lead-storage API
//!
//! Collections live in one JSON document on disk and are rewritten
//! wholesale on every insert. Lead records are append-only: the API never
//! mutates or deletes a stored lead.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;
use veranda_core::types::{
    BrochureLeadSubmission, StatusCheck, StatusCheckSubmission, VisitLeadSubmission,
};
use veranda_core::{BrochureLead, Error, Result, VisitLead};

/// On-disk document holding every collection
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Collections {
    #[serde(default)]
    brochure_leads: Vec<BrochureLead>,

    #[serde(default)]
    contact_leads: Vec<VisitLead>,

    #[serde(default)]
    status_checks: Vec<StatusCheck>,
}

/// File-backed storage for the lead collections
#[derive(Debug)]
pub struct LeadRepository {
    path: PathBuf,
    collections: RwLock<Collections>,
}

impl LeadRepository {
    /// Open a repository over the given file path
    ///
    /// A missing file starts empty. Unlike the metadata overlay, a corrupt
    /// document here is server-owned data and surfaces as an error instead
    /// of being silently discarded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let collections = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| Error::Storage(format!("unreadable lead store {}: {e}", path.display())))?
        } else {
            Collections::default()
        };

        Ok(Self {
            path,
            collections: RwLock::new(collections),
        })
    }

    fn persist(&self, collections: &Collections) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(collections)?;
        std::fs::write(&self.path, raw).map_err(Error::from)
    }

    /// Store a brochure-download submission, assigning id and timestamp
    pub fn insert_brochure_lead(&self, submission: BrochureLeadSubmission) -> Result<BrochureLead> {
        let lead = submission.into_lead();
        let snapshot = {
            let mut collections = self.collections.write();
            collections.brochure_leads.push(lead.clone());
            collections.clone()
        };
        self.persist(&snapshot)?;

        info!(lead_id = %lead.id, "stored brochure lead");
        Ok(lead)
    }

    /// Store a site-visit submission, assigning id and timestamp
    pub fn insert_visit_lead(&self, submission: VisitLeadSubmission) -> Result<VisitLead> {
        let lead = submission.into_lead();
        let snapshot = {
            let mut collections = self.collections.write();
            collections.contact_leads.push(lead.clone());
            collections.clone()
        };
        self.persist(&snapshot)?;

        info!(lead_id = %lead.id, "stored site-visit lead");
        Ok(lead)
    }

    /// Store a status-check ping
    pub fn insert_status_check(&self, submission: StatusCheckSubmission) -> Result<StatusCheck> {
        let record = submission.into_record();
        let snapshot = {
            let mut collections = self.collections.write();
            collections.status_checks.push(record.clone());
            collections.clone()
        };
        self.persist(&snapshot)?;
        Ok(record)
    }

    /// All brochure leads, in insertion (server) order
    #[must_use]
    pub fn brochure_leads(&self) -> Vec<BrochureLead> {
        self.collections.read().brochure_leads.clone()
    }

    /// All site-visit leads, in insertion (server) order
    #[must_use]
    pub fn visit_leads(&self) -> Vec<VisitLead> {
        self.collections.read().contact_leads.clone()
    }

    /// All status-check records
    #[must_use]
    pub fn status_checks(&self) -> Vec<StatusCheck> {
        self.collections.read().status_checks.clone()
    }
}
