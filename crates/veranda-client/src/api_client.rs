//! HTTP client for the lead-storage API

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use veranda_core::types::BrochureLeadSubmission;
use veranda_core::{BrochureLead, Error, Result, VisitLead};

/// API client for the remote lead-storage service
///
/// No request timeout is configured: an unresponsive API leaves the
/// caller's busy indicator active until the request settles on its own.
#[derive(Debug, Clone)]
pub struct LeadApiClient {
    client: Client,
    base_url: String,
}

impl LeadApiClient {
    /// Create a new client against the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the brochure-download lead collection
    ///
    /// A non-array response body is defensively coerced to an empty
    /// collection rather than treated as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API responds with a
    /// non-success status, or an array element cannot be decoded.
    pub async fn fetch_brochure_leads(&self) -> Result<Vec<BrochureLead>> {
        self.fetch_collection("/api/brochure-leads").await
    }

    /// Fetch the site-visit lead collection
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_brochure_leads`].
    pub async fn fetch_visit_leads(&self) -> Result<Vec<VisitLead>> {
        self.fetch_collection("/api/contact-leads").await
    }

    /// Submit a brochure-download lead (the public site's producer path)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the stored record cannot
    /// be decoded.
    pub async fn submit_brochure_lead(
        &self,
        submission: &BrochureLeadSubmission,
    ) -> Result<BrochureLead> {
        let url = format!("{}/api/brochure-lead", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(|e| Error::Http(format!("failed to submit lead: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "API returned error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse stored lead: {e}")))
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, route: &str) -> Result<Vec<T>> {
        let url = format!("{}{route}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("failed to fetch {route}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "API returned error for {route}: {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse {route}: {e}")))?;

        coerce_collection(body)
    }
}

/// Coerce a JSON body to a lead collection
///
/// Arrays decode element-wise; anything else becomes the empty collection.
fn coerce_collection<T: DeserializeOwned>(body: Value) -> Result<Vec<T>> {
    if body.is_array() {
        serde_json::from_value(body).map_err(Error::from)
    } else {
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_coerce_array_decodes_elements() {
        let body = json!([
            {
                "id": "a",
                "name": "Asha",
                "phone": "9876543210",
                "preference": "2 BHK",
                "timestamp": "2024-01-01T10:00:00Z"
            }
        ]);

        let leads: Vec<BrochureLead> = coerce_collection(body).unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, "a");
    }

    #[test]
    fn test_coerce_non_array_becomes_empty() {
        for body in [json!({"error": "oops"}), json!("nope"), json!(42), Value::Null] {
            let leads: Vec<BrochureLead> = coerce_collection(body).unwrap();
            assert!(leads.is_empty());
        }
    }

    #[test]
    fn test_coerce_bad_element_is_a_parse_error() {
        let body = json!([{"id": "a"}]);
        let result: Result<Vec<BrochureLead>> = coerce_collection(body);
        assert!(result.is_err());
    }
}
