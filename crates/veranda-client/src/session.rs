//! Dashboard session state
//!
//! Owns everything the admin dashboard needs between page loads: the
//! authentication gate, the two fetched lead collections, the active
//! filter state and the local metadata overlay.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tracing::{info, warn};
use veranda_analytics::{
    export_brochure_csv, export_filename, export_visit_csv, filtered_leads,
    last_7_days_series_local, leads_on_day, preference_breakdown, status_breakdown, DayBucket,
    FilterState, PreferenceCount, StatusCount,
};
use veranda_core::types::{LeadMetadata, LeadRecord, MetadataPatch};
use veranda_core::{BrochureLead, LeadTab, Result, VisitLead};
use veranda_store::MetadataStore;

use crate::api_client::LeadApiClient;

/// Message shown when the password gate rejects an attempt
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect password. Please try again.";

/// State backing one admin dashboard session
#[derive(Debug)]
pub struct DashboardSession {
    client: LeadApiClient,
    metadata: Arc<MetadataStore>,
    site_slug: String,
    password: String,
    authenticated: bool,
    loading: bool,
    brochure_leads: Vec<BrochureLead>,
    visit_leads: Vec<VisitLead>,
    last_refresh: Option<DateTime<Utc>>,
    filter: FilterState,
}

impl DashboardSession {
    /// Create a session against the given API client and metadata store
    #[must_use]
    pub fn new(
        client: LeadApiClient,
        metadata: Arc<MetadataStore>,
        site_slug: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client,
            metadata,
            site_slug: site_slug.into(),
            password: password.into(),
            authenticated: false,
            loading: false,
            brochure_leads: Vec::new(),
            visit_leads: Vec::new(),
            last_refresh: None,
            filter: FilterState::default(),
        }
    }

    /// Whether the password gate has been passed
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether a refresh is currently in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// When the collections were last replaced by a successful refresh
    #[must_use]
    pub const fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// The active filter state
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Mutable access to the active filter state
    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    /// Attempt to pass the password gate
    ///
    /// A successful attempt authenticates the session. A failed attempt
    /// leaves it unauthenticated and yields [`LOGIN_FAILED_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Returns an authentication error when the password does not match.
    pub fn login(&mut self, attempt: &str) -> Result<()> {
        if attempt == self.password {
            self.authenticated = true;
            info!("dashboard session authenticated");
            Ok(())
        } else {
            warn!("dashboard login rejected");
            Err(veranda_core::Error::Authentication(
                LOGIN_FAILED_MESSAGE.to_string(),
            ))
        }
    }

    /// Log out, clearing the authenticated flag
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Refresh both lead collections from the API
    ///
    /// The two fetches run concurrently and replace local state only when
    /// both succeed, so a partial failure never leaves the tabs out of
    /// step with each other. On failure the previous collections are kept
    /// and the failure is logged rather than propagated.
    pub async fn refresh(&mut self) {
        self.loading = true;

        let outcome = tokio::try_join!(
            self.client.fetch_brochure_leads(),
            self.client.fetch_visit_leads()
        );

        match outcome {
            Ok((mut brochure, mut visits)) => {
                brochure.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
                visits.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
                info!(
                    brochure = brochure.len(),
                    visits = visits.len(),
                    "lead collections refreshed"
                );
                self.brochure_leads = brochure;
                self.visit_leads = visits;
                self.last_refresh = Some(Utc::now());
            }
            Err(e) => {
                warn!(error = %e, "lead refresh failed, keeping previous collections");
            }
        }

        self.loading = false;
    }

    /// All brochure-download leads, newest first
    #[must_use]
    pub fn brochure_leads(&self) -> &[BrochureLead] {
        &self.brochure_leads
    }

    /// All site-visit leads, newest first
    #[must_use]
    pub fn visit_leads(&self) -> &[VisitLead] {
        &self.visit_leads
    }

    /// Switch tabs, resetting filters and selection for the new tab
    pub fn set_tab(&mut self, tab: LeadTab) {
        self.filter = FilterState::for_tab(tab);
    }

    /// Brochure leads passing the active filters
    #[must_use]
    pub fn visible_brochure_leads(&self) -> Vec<&BrochureLead> {
        filtered_leads(&self.brochure_leads, &self.metadata.snapshot(), &self.filter)
    }

    /// Site-visit leads passing the active filters
    #[must_use]
    pub fn visible_visit_leads(&self) -> Vec<&VisitLead> {
        filtered_leads(&self.visit_leads, &self.metadata.snapshot(), &self.filter)
    }

    /// Metadata overlay for a single lead
    #[must_use]
    pub fn lead_metadata(&self, id: &str) -> LeadMetadata {
        self.metadata.get(id)
    }

    /// Apply a metadata patch to a lead
    ///
    /// # Errors
    ///
    /// Returns an error when the overlay cannot be persisted.
    pub fn update_metadata(&self, id: &str, patch: MetadataPatch) -> Result<()> {
        self.metadata.update(id, patch)
    }

    /// Append a timestamped note to a lead
    ///
    /// # Errors
    ///
    /// Returns an error when the overlay cannot be persisted.
    pub fn append_note(&self, id: &str, text: &str) -> Result<()> {
        self.metadata.append_note(id, text)
    }

    /// Delete a note from a lead by index
    ///
    /// # Errors
    ///
    /// Returns an error when the overlay cannot be persisted.
    pub fn delete_note(&self, id: &str, index: usize) -> Result<()> {
        self.metadata.delete_note(id, index)
    }

    /// Total leads across both collections
    #[must_use]
    pub fn total_leads(&self) -> usize {
        self.brochure_leads.len() + self.visit_leads.len()
    }

    /// Leads received on the current local calendar day, both collections
    #[must_use]
    pub fn leads_today(&self) -> usize {
        let today = Local::now().date_naive();
        leads_on_day(&self.brochure_leads, &Local, today)
            + leads_on_day(&self.visit_leads, &Local, today)
    }

    /// Chart series for the last seven local calendar days
    #[must_use]
    pub fn activity_series(&self) -> Vec<DayBucket> {
        last_7_days_series_local(&self.brochure_leads, &self.visit_leads)
    }

    /// Preference distribution over the full brochure collection
    ///
    /// Charts recompute from the complete collections; filters only
    /// narrow the rendered lead list.
    #[must_use]
    pub fn preference_chart(&self) -> Vec<PreferenceCount> {
        preference_breakdown(&self.brochure_leads)
    }

    /// Status distribution over the union of both collections
    #[must_use]
    pub fn status_chart(&self) -> Vec<StatusCount> {
        status_breakdown(
            &self.brochure_leads,
            &self.visit_leads,
            &self.metadata.snapshot(),
        )
    }

    /// Export the currently visible leads of the active tab as CSV
    ///
    /// # Errors
    ///
    /// Returns an error when CSV serialization fails.
    pub fn export_csv(&self) -> Result<String> {
        let snapshot = self.metadata.snapshot();
        match self.filter.tab {
            LeadTab::Brochure => {
                export_brochure_csv(self.visible_brochure_leads(), &snapshot)
            }
            LeadTab::SiteVisit => export_visit_csv(self.visible_visit_leads(), &snapshot),
        }
    }

    /// Suggested filename for [`Self::export_csv`], dated with the local day
    #[must_use]
    pub fn export_csv_filename(&self) -> String {
        export_filename(&self.site_slug, self.filter.tab, Local::now().date_naive())
    }
}
