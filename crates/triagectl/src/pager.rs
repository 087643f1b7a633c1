//! Hand a text blob to the operator's pager.

use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};

use triage_common::error::TriageError;

/// Page `text` through `$PAGER` (default `less -R`), printing directly when
/// stdout is not a terminal or the pager cannot be spawned.
pub fn page(text: &str) -> Result<(), TriageError> {
    if !io::stdout().is_terminal() {
        return print_plain(text);
    }

    let pager = std::env::var("PAGER").unwrap_or_else(|_| "less -R".to_string());
    let mut parts = pager.split_whitespace();
    let program = match parts.next() {
        Some(program) => program,
        None => return print_plain(text),
    };

    match Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(mut stdin) = child.stdin.take() {
                // The pager may quit before reading everything; a broken
                // pipe here is not an error.
                let _ = stdin.write_all(text.as_bytes());
            }
            let _ = child.wait();
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, pager = %pager, "pager unavailable, printing directly");
            print_plain(text)
        }
    }
}

fn print_plain(text: &str) -> Result<(), TriageError> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
