//! CSV export of lead subsets
//!
//! Fixed column ordering per tab, every field quoted, one row per lead.
//! Derived columns (effective status, flattened notes) come from the
//! metadata overlay at export time.

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::collections::HashMap;
use veranda_core::types::LeadId;
use veranda_core::{BrochureLead, Error, LeadMetadata, LeadTab, Result, VisitLead};

/// Column headers for the brochure tab
const BROCHURE_HEADERS: [&str; 6] = ["Name", "Phone", "Preference", "Status", "Notes", "Date"];

/// Column headers for the site-visit tab
const VISIT_HEADERS: [&str; 10] = [
    "Name",
    "Phone",
    "Email",
    "Preferred Date",
    "Preferred Time",
    "Preferred Contact",
    "Message",
    "Status",
    "Notes",
    "Date",
];

/// Delimiter joining a lead's notes into one CSV field
const NOTE_DELIMITER: &str = " | ";

/// Export filename: `{site}-{tab}-leads-{date}.csv`
#[must_use]
pub fn export_filename(site: &str, tab: LeadTab, date: NaiveDate) -> String {
    format!("{site}-{}-leads-{}.csv", tab.slug(), date.format("%Y-%m-%d"))
}

/// Serialize brochure leads to CSV text
pub fn export_brochure_csv<'a, I>(
    leads: I,
    metadata: &HashMap<LeadId, LeadMetadata>,
) -> Result<String>
where
    I: IntoIterator<Item = &'a BrochureLead>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(BROCHURE_HEADERS)
        .map_err(|e| Error::Export(e.to_string()))?;

    for lead in leads {
        let entry = metadata.get(&lead.id).cloned().unwrap_or_default();
        let notes = flatten_notes(&entry);
        let date = lead.timestamp.format("%Y-%m-%d").to_string();
        writer
            .write_record([
                lead.name.as_str(),
                lead.phone.as_str(),
                lead.preference.map_or("Not specified", |p| p.label()),
                entry.status.label(),
                notes.as_str(),
                date.as_str(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    finish(writer)
}

/// Serialize site-visit leads to CSV text
pub fn export_visit_csv<'a, I>(
    leads: I,
    metadata: &HashMap<LeadId, LeadMetadata>,
) -> Result<String>
where
    I: IntoIterator<Item = &'a VisitLead>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(VISIT_HEADERS)
        .map_err(|e| Error::Export(e.to_string()))?;

    for lead in leads {
        let entry = metadata.get(&lead.id).cloned().unwrap_or_default();
        let notes = flatten_notes(&entry);
        let date = lead.timestamp.format("%Y-%m-%d").to_string();
        writer
            .write_record([
                lead.name.as_str(),
                lead.phone.as_str(),
                lead.email.as_deref().unwrap_or(""),
                lead.preferred_date.as_deref().unwrap_or(""),
                lead.preferred_time.as_deref().unwrap_or(""),
                lead.preferred_contact.as_deref().unwrap_or(""),
                lead.message.as_deref().unwrap_or(""),
                entry.status.label(),
                notes.as_str(),
                date.as_str(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    finish(writer)
}

fn flatten_notes(entry: &LeadMetadata) -> String {
    entry
        .notes
        .iter()
        .map(|note| note.text.as_str())
        .collect::<Vec<_>>()
        .join(NOTE_DELIMITER)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use veranda_core::{LeadStatus, MetadataPatch, Preference};

    fn brochure(id: &str, preference: Option<Preference>) -> BrochureLead {
        BrochureLead {
            id: id.to_string(),
            name: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            preference,
            timestamp: "2024-01-02T10:30:00Z".parse().unwrap(),
        }
    }

    fn visit_with_message(id: &str, message: &str) -> VisitLead {
        VisitLead {
            id: id.to_string(),
            name: "Meera".to_string(),
            phone: "8765432109".to_string(),
            email: Some("meera@example.com".to_string()),
            preferred_date: Some("2024-02-10".to_string()),
            preferred_time: Some("Morning".to_string()),
            preferred_contact: Some("WhatsApp".to_string()),
            message: Some(message.to_string()),
            timestamp: "2024-02-01T08:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_filename_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            export_filename("veranda", LeadTab::Brochure, date),
            "veranda-brochure-leads-2024-03-05.csv"
        );
        assert_eq!(
            export_filename("veranda", LeadTab::SiteVisit, date),
            "veranda-site-visit-leads-2024-03-05.csv"
        );
    }

    #[test]
    fn test_brochure_export_headers_and_fields() {
        let leads = vec![brochure("a", Some(Preference::ThreeBhk))];
        let csv_text = export_brochure_csv(&leads, &HashMap::new()).unwrap();

        let mut lines = csv_text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"Name\",\"Phone\",\"Preference\",\"Status\",\"Notes\",\"Date\""
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"Asha Rao\""));
        assert!(row.contains("\"3 BHK\""));
        assert!(row.contains("\"New\""), "default status when no metadata");
    }

    #[test]
    fn test_date_column_is_a_calendar_date() {
        let leads = vec![brochure("a", None)];
        let csv_text = export_brochure_csv(&leads, &HashMap::new()).unwrap();

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(5), Some("2024-01-02"));
    }

    #[test]
    fn test_unset_preference_exports_as_not_specified() {
        let leads = vec![brochure("a", None)];
        let csv_text = export_brochure_csv(&leads, &HashMap::new()).unwrap();
        assert!(csv_text.contains("\"Not specified\""));
    }

    #[test]
    fn test_derived_columns_come_from_metadata() {
        let leads = vec![brochure("a", None)];
        let mut entry = LeadMetadata::default();
        entry.apply(MetadataPatch::with_status(LeadStatus::Contacted));
        entry.notes.push(veranda_core::Note {
            text: "called twice".to_string(),
            time: "2024-01-02T11:00:00Z".parse().unwrap(),
        });
        entry.notes.push(veranda_core::Note {
            text: "asked for floor plan".to_string(),
            time: "2024-01-02T12:00:00Z".parse().unwrap(),
        });
        let metadata = HashMap::from([("a".to_string(), entry)]);

        let csv_text = export_brochure_csv(&leads, &metadata).unwrap();
        assert!(csv_text.contains("\"Contacted\""));
        assert!(csv_text.contains("\"called twice | asked for floor plan\""));
    }

    #[test]
    fn test_comma_in_message_roundtrips_through_csv_parser() {
        let message = "Interested, but only after March, maybe April";
        let leads = vec![visit_with_message("v1", message)];

        let csv_text = export_visit_csv(&leads, &HashMap::new()).unwrap();

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(6), Some("Message"));

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(6), Some(message));
    }

    #[test]
    fn test_one_row_per_lead() {
        let leads = vec![brochure("a", None), brochure("b", None), brochure("c", None)];
        let csv_text = export_brochure_csv(&leads, &HashMap::new()).unwrap();
        assert_eq!(csv_text.lines().count(), 4, "header plus three rows");
    }

    #[test]
    fn test_export_of_reference_subset() {
        // The dashboard exports its filtered view, which is a Vec<&Lead>
        let owned = vec![brochure("a", None), brochure("b", None)];
        let subset: Vec<&BrochureLead> = owned.iter().filter(|l| l.id == "b").collect();

        let csv_text = export_brochure_csv(subset, &HashMap::new()).unwrap();
        assert_eq!(csv_text.lines().count(), 2);
    }
}
