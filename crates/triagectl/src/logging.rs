//! Logging for triagectl operations
//!
//! XDG-compliant invocation log with fallback chain; one JSONL record per
//! command run.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Log entry for each triagectl invocation
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp
    pub ts: String,

    /// Request ID (UUID)
    pub req_id: String,

    /// Command name
    pub command: String,

    /// How the problem input was supplied: text, file, or directory
    pub input_kind: String,

    /// Unique solutions shown
    pub solutions: usize,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Exit code
    pub exit_code: i32,

    /// Success flag
    pub ok: bool,

    /// Error details if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl LogEntry {
    /// Discover log file path with fallback chain
    ///
    /// Priority:
    /// 1. $TRIAGECTL_LOG_FILE environment variable (explicit override)
    /// 2. $XDG_STATE_HOME/triage/ctl.jsonl (XDG standard)
    /// 3. ~/.local/state/triage/ctl.jsonl (XDG fallback)
    fn discover_log_path() -> Option<String> {
        if let Ok(path) = std::env::var("TRIAGECTL_LOG_FILE") {
            return Some(path);
        }

        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            return Some(format!("{}/triage/ctl.jsonl", xdg_state));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(format!("{}/.local/state/triage/ctl.jsonl", home));
        }

        None
    }

    /// Write the entry. Stdout belongs to the menu, so logging failures are
    /// only traced, never printed and never fatal.
    pub fn write(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                tracing::debug!(error = %err, "could not serialize log entry");
                return;
            }
        };

        if let Some(path) = Self::discover_log_path() {
            if let Err(err) = Self::write_to_file(&json, Path::new(&path)) {
                tracing::debug!(error = %err, path = %path, "could not write log entry");
            }
        }
    }

    /// Attempt to write log entry to file
    fn write_to_file(json: &str, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Generate request ID
    pub fn generate_req_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Get current timestamp in ISO 8601 format
    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}
