//! Lead filtering

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use veranda_core::types::LeadId;
use veranda_core::{LeadMetadata, LeadRecord, LeadStatus, LeadTab, Preference};

/// Transient, session-only view filter
///
/// Reset to defaults on tab switch; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search over name, phone and email
    pub search: String,

    /// Status filter; `None` shows all statuses
    pub status: Option<LeadStatus>,

    /// Preference filter (brochure tab only); `None` shows all
    pub preference: Option<Preference>,

    /// Inclusive calendar-day lower bound on submission time
    pub date_from: Option<NaiveDate>,

    /// Inclusive calendar-day upper bound (end of that day)
    pub date_to: Option<NaiveDate>,

    /// Active collection
    pub tab: LeadTab,

    /// Multi-select set of lead ids
    pub selected: BTreeSet<LeadId>,
}

impl FilterState {
    /// Fresh default filter for the given tab
    #[must_use]
    pub fn for_tab(tab: LeadTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Toggle a lead id in the multi-select set
    pub fn toggle_selected(&mut self, lead_id: &str) {
        if !self.selected.remove(lead_id) {
            self.selected.insert(lead_id.to_string());
        }
    }
}

/// Subset of `leads` passing every active filter predicate
///
/// Pure and order-preserving: identical inputs always yield the identical
/// subsequence of the input. Absent filter values are always-true; active
/// predicates are ANDed. The effective status of a lead with no metadata
/// entry is `New`. Date bounds compare the UTC calendar day of the lead's
/// timestamp, making `date_to` end-of-day inclusive.
#[must_use]
pub fn filtered_leads<'a, T: LeadRecord>(
    leads: &'a [T],
    metadata: &HashMap<LeadId, LeadMetadata>,
    filter: &FilterState,
) -> Vec<&'a T> {
    let needle = filter.search.trim().to_lowercase();

    leads
        .iter()
        .filter(|lead| {
            if !needle.is_empty() {
                let matches = lead.name().to_lowercase().contains(&needle)
                    || lead.phone().to_lowercase().contains(&needle)
                    || lead
                        .email()
                        .map_or(false, |email| email.to_lowercase().contains(&needle));
                if !matches {
                    return false;
                }
            }

            if let Some(wanted) = filter.status {
                let effective = metadata
                    .get(lead.id())
                    .map_or(LeadStatus::New, |entry| entry.status);
                if effective != wanted {
                    return false;
                }
            }

            // Preference only applies to the brochure collection
            if filter.tab == LeadTab::Brochure {
                if let Some(wanted) = filter.preference {
                    if lead.preference() != Some(wanted) {
                        return false;
                    }
                }
            }

            let day = lead.timestamp().date_naive();
            if let Some(from) = filter.date_from {
                if day < from {
                    return false;
                }
            }
            if let Some(to) = filter.date_to {
                if day > to {
                    return false;
                }
            }

            true
        })
        .collect()
}
