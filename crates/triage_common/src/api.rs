//! Diagnostics API client.
//!
//! Provides a generic interface for submitting problem reports and fetching
//! solution documents. Supports both the real HTTP implementation and fake
//! clients for testing.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::config::ApiSettings;
use crate::error::TriageError;

/// One candidate solution reference returned by the diagnostics API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Resource locator; the trailing path segment is the solution id.
    pub uri: String,
    /// Human-readable title.
    pub value: String,
}

/// The result of diagnosing one submitted problem input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A full solution document, fetched for the follow-up lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub body: String,
}

/// Generic diagnostics API trait
pub trait DiagnosisApi {
    /// Diagnose free text and return the matching problem reports.
    fn diagnose_text(&self, text: &str) -> Result<Vec<Report>, TriageError>;

    /// Diagnose the contents of a file at `path`.
    fn diagnose_file(&self, path: &Path) -> Result<Vec<Report>, TriageError>;

    /// Fetch one solution document by id.
    fn get_solution(&self, solution_id: &str) -> Result<Solution, TriageError>;
}

/// Real diagnostics API client using HTTP
pub struct HttpDiagnosisApi {
    settings: ApiSettings,
    client: reqwest::blocking::Client,
}

impl HttpDiagnosisApi {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> &str {
        self.settings.endpoint.trim_end_matches('/')
    }

    /// Submit a problem report body; both entry points go over the same wire.
    fn post_problem(&self, text: &str) -> Result<Vec<Report>, TriageError> {
        let url = format!("{}/problems", self.endpoint());
        tracing::debug!(url = %url, bytes = text.len(), "submitting problem report");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(text.to_string())
            .send()
            .map_err(request_error)?;

        decode(response)
    }
}

impl DiagnosisApi for HttpDiagnosisApi {
    fn diagnose_text(&self, text: &str) -> Result<Vec<Report>, TriageError> {
        self.post_problem(text)
    }

    fn diagnose_file(&self, path: &Path) -> Result<Vec<Report>, TriageError> {
        // Log files are not always clean UTF-8.
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        self.post_problem(&text)
    }

    fn get_solution(&self, solution_id: &str) -> Result<Solution, TriageError> {
        let url = format!("{}/solutions/{}", self.endpoint(), solution_id);
        tracing::debug!(url = %url, "fetching solution document");

        let response = self.client.get(&url).send().map_err(request_error)?;
        decode(response)
    }
}

/// Map transport failures to the error taxonomy.
fn request_error(err: reqwest::Error) -> TriageError {
    if err.is_timeout() || err.is_connect() {
        TriageError::ApiConnectivity(err.to_string())
    } else {
        TriageError::ApiRequest(err.to_string())
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T, TriageError> {
    let status = response.status();
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("unknown");
        return Err(TriageError::ApiRequest(format!(
            "{} {}",
            status.as_u16(),
            reason
        )));
    }

    let body = response.text().map_err(request_error)?;
    serde_json::from_str(&body)
        .map_err(|e| TriageError::Parse(format!("undecodable API response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_decode_with_missing_links() {
        let raw = r#"[{"links":[{"uri":"https://api.example.com/rs/solutions/42","value":"Fix"}]},{}]"#;
        let reports: Vec<Report> = serde_json::from_str(raw).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].links[0].value, "Fix");
        assert!(reports[1].links.is_empty());
    }

    #[test]
    fn solution_decodes_with_sparse_fields() {
        let raw = r#"{"id":"42","title":"Fix the thing"}"#;
        let solution: Solution = serde_json::from_str(raw).unwrap();
        assert_eq!(solution.id, "42");
        assert_eq!(solution.title, "Fix the thing");
        assert!(solution.uri.is_empty());
        assert!(solution.body.is_empty());
    }
}
