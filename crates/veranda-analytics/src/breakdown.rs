//! Aggregate counts over the merged lead and metadata set

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::HashMap;
use veranda_core::types::LeadId;
use veranda_core::{LeadMetadata, LeadRecord, LeadStatus, Preference};

/// Count for one preference value
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PreferenceCount {
    /// The preference
    pub preference: Preference,

    /// Number of brochure leads that selected it
    pub count: usize,
}

/// Count for one status bucket
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusCount {
    /// The status
    pub status: LeadStatus,

    /// Number of leads whose effective status matches
    pub count: usize,
}

/// Per-preference counts over the brochure collection
///
/// Covers the four known preference values in declaration order,
/// omitting zero-count entries. Leads with no preference are excluded
/// here (see [`unspecified_count`]) but remain in all other views.
#[must_use]
pub fn preference_breakdown<T: LeadRecord>(leads: &[T]) -> Vec<PreferenceCount> {
    Preference::ALL
        .into_iter()
        .filter_map(|preference| {
            let count = leads
                .iter()
                .filter(|lead| lead.preference() == Some(preference))
                .count();
            (count > 0).then_some(PreferenceCount { preference, count })
        })
        .collect()
}

/// Number of brochure leads that did not select a preference
#[must_use]
pub fn unspecified_count<T: LeadRecord>(leads: &[T]) -> usize {
    leads.iter().filter(|lead| lead.preference().is_none()).count()
}

/// Per-status counts over the union of both lead collections
///
/// Always all four buckets, zeros included; a lead with no metadata entry
/// counts as `New`.
#[must_use]
pub fn status_breakdown<B, V>(
    brochure: &[B],
    visits: &[V],
    metadata: &HashMap<LeadId, LeadMetadata>,
) -> Vec<StatusCount>
where
    B: LeadRecord,
    V: LeadRecord,
{
    let effective = |id: &str| {
        metadata
            .get(id)
            .map_or(LeadStatus::New, |entry| entry.status)
    };

    LeadStatus::ALL
        .into_iter()
        .map(|status| {
            let count = brochure
                .iter()
                .filter(|lead| effective(lead.id()) == status)
                .count()
                + visits
                    .iter()
                    .filter(|lead| effective(lead.id()) == status)
                    .count();
            StatusCount { status, count }
        })
        .collect()
}

/// Number of leads submitted on the given calendar day in `tz`
#[must_use]
pub fn leads_on_day<Tz: TimeZone, T: LeadRecord>(leads: &[T], tz: &Tz, date: NaiveDate) -> usize {
    leads
        .iter()
        .filter(|lead| lead.timestamp().with_timezone(tz).date_naive() == date)
        .count()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use veranda_core::{BrochureLead, MetadataPatch, VisitLead};

    fn brochure(id: &str, preference: Option<Preference>) -> BrochureLead {
        BrochureLead {
            id: id.to_string(),
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            preference,
            timestamp: "2024-01-02T10:00:00Z".parse().unwrap(),
        }
    }

    fn visit(id: &str) -> VisitLead {
        VisitLead {
            id: id.to_string(),
            name: "Meera".to_string(),
            phone: "8765432109".to_string(),
            email: None,
            preferred_date: None,
            preferred_time: None,
            preferred_contact: None,
            message: None,
            timestamp: "2024-01-02T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_preference_breakdown_omits_zero_and_unset() {
        let leads = vec![
            brochure("a", Some(Preference::TwoBhk)),
            brochure("b", Some(Preference::TwoBhk)),
            brochure("c", None),
        ];

        let breakdown = preference_breakdown(&leads);
        assert_eq!(
            breakdown,
            vec![PreferenceCount {
                preference: Preference::TwoBhk,
                count: 2
            }]
        );

        assert_eq!(unspecified_count(&leads), 1);
    }

    #[test]
    fn test_preference_breakdown_keeps_declaration_order() {
        let leads = vec![
            brochure("a", Some(Preference::Penthouse)),
            brochure("b", Some(Preference::TwoBhk)),
            brochure("c", Some(Preference::ThreeBhk)),
        ];

        let order: Vec<Preference> = preference_breakdown(&leads)
            .into_iter()
            .map(|c| c.preference)
            .collect();
        assert_eq!(
            order,
            vec![
                Preference::TwoBhk,
                Preference::ThreeBhk,
                Preference::Penthouse
            ]
        );
    }

    #[test]
    fn test_status_breakdown_has_all_four_buckets() {
        let brochure_leads = vec![brochure("a", None), brochure("b", None)];
        let visit_leads = vec![visit("v1")];

        let mut closed = LeadMetadata::default();
        closed.apply(MetadataPatch::with_status(LeadStatus::Closed));
        let metadata = HashMap::from([("v1".to_string(), closed)]);

        let breakdown = status_breakdown(&brochure_leads, &visit_leads, &metadata);

        assert_eq!(breakdown.len(), 4);
        let by_status: HashMap<LeadStatus, usize> = breakdown
            .into_iter()
            .map(|c| (c.status, c.count))
            .collect();
        assert_eq!(by_status[&LeadStatus::New], 2);
        assert_eq!(by_status[&LeadStatus::Contacted], 0);
        assert_eq!(by_status[&LeadStatus::SiteVisitScheduled], 0);
        assert_eq!(by_status[&LeadStatus::Closed], 1);
    }

    #[test]
    fn test_status_breakdown_total_matches_lead_count() {
        let brochure_leads = vec![brochure("a", None), brochure("b", None)];
        let visit_leads = vec![visit("v1"), visit("v2")];

        let breakdown = status_breakdown(&brochure_leads, &visit_leads, &HashMap::new());
        let total: usize = breakdown.iter().map(|c| c.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_leads_on_day() {
        let leads = vec![brochure("a", None), brochure("b", None)];
        let on_day = leads_on_day(
            &leads,
            &Utc,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        assert_eq!(on_day, 2);

        let off_day = leads_on_day(
            &leads,
            &Utc,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        );
        assert_eq!(off_day, 0);
    }
}
