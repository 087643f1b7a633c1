//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};

/// Triage CLI
#[derive(Parser)]
#[command(name = "triagectl")]
#[command(about = "Triage - support diagnostics from the command line", long_about = None)]
#[command(version = env!("TRIAGE_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a file, a directory containing files, or plain text for analysis
    #[command(after_help = "Examples:\n  \
        triagectl diagnose /var/log/messages\n  \
        triagectl diagnose /var/spool/abrt/ccpp-2025-11-02-09:53:26-4080\n  \
        triagectl diagnose \"error code: 1, message: internal error\"")]
    Diagnose {
        /// Keywords, a file, or a directory containing log files; collected
        /// interactively from stdin when omitted
        input: Option<String>,
    },

    /// Show version (hidden - use --version flag instead)
    #[command(hide = true)]
    Version,
}
