//! Notification hooks fired when a new lead arrives
//!
//! The storage API tells the sales team about fresh leads through a
//! [`LeadNotifier`]. The default implementation just logs; a deployment
//! can plug in email or chat delivery without touching the handlers.

use veranda_core::{BrochureLead, VisitLead};

/// Sink for new-lead notifications
///
/// Delivery is best-effort. Implementations must not fail the request
/// path; anything that goes wrong should be logged and swallowed.
pub trait LeadNotifier: Send + Sync + std::fmt::Debug {
    /// Called after a brochure-download lead is stored
    fn brochure_lead_stored(&self, lead: &BrochureLead);

    /// Called after a site-visit lead is stored
    fn visit_lead_stored(&self, lead: &VisitLead);
}

/// Notifier that writes new-lead events to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LeadNotifier for LogNotifier {
    fn brochure_lead_stored(&self, lead: &BrochureLead) {
        tracing::info!(
            id = %lead.id,
            name = %lead.name,
            preference = ?lead.preference,
            "new brochure lead stored"
        );
    }

    fn visit_lead_stored(&self, lead: &VisitLead) {
        tracing::info!(
            id = %lead.id,
            name = %lead.name,
            preferred_date = ?lead.preferred_date,
            "new site visit lead stored"
        );
    }
}
