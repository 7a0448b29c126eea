//! Core data types for the Veranda lead toolkit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Lead identifier type (uuid string assigned by the storage API)
pub type LeadId = String;

/// Apartment preference selected on the brochure-download form
///
/// Closed set: the marketing site only offers these four layouts. Leads
/// submitted without a selection carry no preference at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Preference {
    /// 2 bedroom unit
    #[serde(rename = "2 BHK")]
    TwoBhk,
    /// 3 bedroom unit
    #[serde(rename = "3 BHK")]
    ThreeBhk,
    /// 3.5 bedroom unit
    #[serde(rename = "3.5 BHK")]
    ThreeAndHalfBhk,
    /// 5 bedroom penthouse
    #[serde(rename = "5 BHK Penthouse")]
    Penthouse,
}

impl Preference {
    /// All known preferences, in the order the site presents them
    pub const ALL: [Self; 4] = [
        Self::TwoBhk,
        Self::ThreeBhk,
        Self::ThreeAndHalfBhk,
        Self::Penthouse,
    ];

    /// Display label, matching the wire string exactly
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoBhk => "2 BHK",
            Self::ThreeBhk => "3 BHK",
            Self::ThreeAndHalfBhk => "3.5 BHK",
            Self::Penthouse => "5 BHK Penthouse",
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sales pipeline status tracked locally per lead
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    /// Fresh lead, nobody has reached out yet
    New,
    /// First contact made
    Contacted,
    /// A site visit has been scheduled
    #[serde(rename = "Site Visit Scheduled")]
    SiteVisitScheduled,
    /// Deal closed (won or lost)
    Closed,
}

impl LeadStatus {
    /// All statuses, in pipeline order
    pub const ALL: [Self; 4] = [
        Self::New,
        Self::Contacted,
        Self::SiteVisitScheduled,
        Self::Closed,
    ];

    /// Display label, matching the wire string exactly
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::SiteVisitScheduled => "Site Visit Scheduled",
            Self::Closed => "Closed",
        }
    }

    /// Accent color used by dashboard renderers for this status
    ///
    /// Exhaustive on purpose: adding a status without a color is a compile
    /// error, not a missing map entry.
    #[must_use]
    pub const fn accent_color(self) -> &'static str {
        match self {
            Self::New => "#3b82f6",
            Self::Contacted => "#f59e0b",
            Self::SiteVisitScheduled => "#8b5cf6",
            Self::Closed => "#10b981",
        }
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        Self::New
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which lead collection a dashboard view is looking at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LeadTab {
    /// Brochure-download leads
    Brochure,
    /// Site-visit (contact form) leads
    SiteVisit,
}

impl LeadTab {
    /// Slug used in export filenames
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Brochure => "brochure",
            Self::SiteVisit => "site-visit",
        }
    }
}

impl Default for LeadTab {
    fn default() -> Self {
        Self::Brochure
    }
}

impl std::fmt::Display for LeadTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Common read access over both lead variants
///
/// The analytics functions filter and bucket through this seam so they do
/// not care which collection a lead came from.
pub trait LeadRecord {
    /// Server-assigned unique identifier
    fn id(&self) -> &str;

    /// Contact name
    fn name(&self) -> &str;

    /// Contact phone number
    fn phone(&self) -> &str;

    /// Contact email, when the form collected one
    fn email(&self) -> Option<&str> {
        None
    }

    /// Apartment preference, when one was selected
    fn preference(&self) -> Option<Preference> {
        None
    }

    /// Server-assigned submission time
    fn timestamp(&self) -> DateTime<Utc>;
}

impl<T: LeadRecord + ?Sized> LeadRecord for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn phone(&self) -> &str {
        (**self).phone()
    }

    fn email(&self) -> Option<&str> {
        (**self).email()
    }

    fn preference(&self) -> Option<Preference> {
        (**self).preference()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        (**self).timestamp()
    }
}

/// A lead captured by the brochure-download form
///
/// Server-owned and immutable; collections are replaced wholesale on
/// refetch, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct BrochureLead {
    /// Unique identifier assigned by the storage API
    pub id: LeadId,

    /// Contact name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Contact phone number
    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    /// Apartment preference, if selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,

    /// Submission time, assigned by the server
    pub timestamp: DateTime<Utc>,
}

impl LeadRecord for BrochureLead {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn preference(&self) -> Option<Preference> {
        self.preference
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A lead captured by the site-visit contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VisitLead {
    /// Unique identifier assigned by the storage API
    pub id: LeadId,

    /// Contact name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Contact phone number
    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Requested visit date, free-form as entered on the site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,

    /// Requested visit time slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,

    /// Preferred contact channel (phone, whatsapp, email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<String>,

    /// Free-form message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub message: Option<String>,

    /// Submission time, assigned by the server
    pub timestamp: DateTime<Utc>,
}

impl LeadRecord for VisitLead {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A dated note attached to a lead by the sales team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Note body
    pub text: String,

    /// When the note was written
    pub time: DateTime<Utc>,
}

/// Locally-owned mutable annotations for one lead
///
/// Keyed by lead id in the metadata store. Entries are never validated
/// against which leads actually exist; stale entries are harmless.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadMetadata {
    /// Pipeline status; absent entries read as `New`
    #[serde(default)]
    pub status: LeadStatus,

    /// Insertion-ordered notes
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Shallow top-level patch applied to a [`LeadMetadata`] entry
///
/// Setting `status` leaves `notes` untouched unless `notes` is also set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataPatch {
    /// New status, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,

    /// Replacement notes sequence, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
}

impl MetadataPatch {
    /// Patch that only changes the status
    #[must_use]
    pub const fn with_status(status: LeadStatus) -> Self {
        Self {
            status: Some(status),
            notes: None,
        }
    }

    /// Patch that only replaces the notes sequence
    #[must_use]
    pub const fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            status: None,
            notes: Some(notes),
        }
    }
}

impl LeadMetadata {
    /// Merge a patch into this entry (shallow, top-level)
    ///
    /// Idempotent: applying the same patch twice yields the same state.
    pub fn apply(&mut self, patch: MetadataPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Inbound payload for the brochure-download form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrochureLeadSubmission {
    /// Contact name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Contact phone number
    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    /// Apartment preference, if selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,
}

impl BrochureLeadSubmission {
    /// Promote the submission to a stored lead, assigning id and timestamp
    #[must_use]
    pub fn into_lead(self) -> BrochureLead {
        BrochureLead {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            phone: self.phone,
            preference: self.preference,
            timestamp: Utc::now(),
        }
    }
}

/// Inbound payload for the site-visit contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VisitLeadSubmission {
    /// Contact name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Contact phone number
    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,

    /// Requested visit date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,

    /// Requested visit time slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,

    /// Preferred contact channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<String>,

    /// Free-form message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

impl VisitLeadSubmission {
    /// Promote the submission to a stored lead, assigning id and timestamp
    #[must_use]
    pub fn into_lead(self) -> VisitLead {
        VisitLead {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            phone: self.phone,
            email: self.email,
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
            preferred_contact: self.preferred_contact,
            message: self.message,
            timestamp: Utc::now(),
        }
    }
}

/// Uptime ping record kept by the storage API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCheck {
    /// Unique identifier
    pub id: String,

    /// Name of the client that pinged
    pub client_name: String,

    /// When the ping was received
    pub timestamp: DateTime<Utc>,
}

/// Inbound payload for a status-check ping
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatusCheckSubmission {
    /// Name of the client pinging
    #[validate(length(min = 1, max = 255))]
    pub client_name: String,
}

impl StatusCheckSubmission {
    /// Promote the ping to a stored record
    #[must_use]
    pub fn into_record(self) -> StatusCheck {
        StatusCheck {
            id: Uuid::new_v4().to_string(),
            client_name: self.client_name,
            timestamp: Utc::now(),
        }
    }
}
