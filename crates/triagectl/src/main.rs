//! Triage Control - CLI for the triage support-diagnostics service
//!
//! Submits a problem description to the remote diagnostics API and walks the
//! operator through the returned solutions.

use std::time::Instant;

use clap::Parser;
use triage_common::api::HttpDiagnosisApi;
use triage_common::config::Config;
use triage_common::ui;

use triagectl::cli::{Cli, Commands};
use triagectl::errors;
use triagectl::logging::{ErrorDetails, LogEntry};
use triagectl::{commands, input, session};

// Version is embedded at build time
const VERSION: &str = env!("TRIAGE_VERSION");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    let exit_code = match cli.command {
        Commands::Diagnose { input } => run_diagnose(&config, input),
        Commands::Version => {
            println!("triagectl v{}", VERSION);
            errors::EXIT_SUCCESS
        }
    };

    std::process::exit(exit_code);
}

fn run_diagnose(config: &Config, raw_input: Option<String>) -> i32 {
    let started = Instant::now();
    let req_id = LogEntry::generate_req_id();

    let api = match HttpDiagnosisApi::new(config.api.clone()) {
        Ok(api) => api,
        Err(err) => {
            ui::print_err(&format!("could not initialize the API client: {err:#}"));
            return errors::EXIT_GENERAL_ERROR;
        }
    };

    let mut input_kind = "none";
    let result = input::resolve(raw_input).and_then(|problem| {
        input_kind = problem.kind();
        commands::diagnose(&api, problem, session::is_interactive())
    });

    let (exit_code, solutions, error) = match &result {
        Ok(count) => (errors::EXIT_SUCCESS, *count, None),
        Err(err) => {
            ui::print_err(&err.to_string());
            tracing::warn!(error = %err, "diagnose failed");
            (
                errors::exit_code_for(err),
                0,
                Some(ErrorDetails {
                    code: err.code().to_string(),
                    message: err.to_string(),
                }),
            )
        }
    };

    LogEntry {
        ts: LogEntry::now(),
        req_id,
        command: "diagnose".to_string(),
        input_kind: input_kind.to_string(),
        solutions,
        duration_ms: started.elapsed().as_millis() as u64,
        exit_code,
        ok: result.is_ok(),
        error,
    }
    .write();

    exit_code
}
