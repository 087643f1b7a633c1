//! Error types for the triage tools.

use thiserror::Error;

/// Everything that can end a diagnose invocation.
///
/// No retries anywhere: each of these is terminal for the current invocation
/// and the session loop returns the operator to the prior menu.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("diagnose requires a file, directory, or text")]
    MissingInput,

    #[error("problem connecting to the diagnostics API, is the service accessible from this host? ({0})")]
    ApiConnectivity(String),

    #[error("the diagnostics API rejected the request: {0}")]
    ApiRequest(String),

    #[error("unable to find solutions for the given input")]
    NoResults,

    #[error("problem parsing the returned solutions: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TriageError {
    /// Stable short code for the invocation log.
    pub fn code(&self) -> &'static str {
        match self {
            TriageError::MissingInput => "missing-input",
            TriageError::ApiConnectivity(_) => "api-connectivity",
            TriageError::ApiRequest(_) => "api-request",
            TriageError::NoResults => "no-results",
            TriageError::Parse(_) => "parse",
            TriageError::Io(_) => "io",
            TriageError::Json(_) => "json",
        }
    }
}
