//! Triage Common - shared types for the triage support tools.
//!
//! Error taxonomy, configuration, the diagnostics API client, and terminal
//! styling constants used by the CLI.

pub mod api;
pub mod config;
pub mod error;
pub mod ui;

pub use error::TriageError;
