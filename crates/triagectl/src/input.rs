//! Problem-input resolution for the diagnose command.
//!
//! The positional argument is either plain text, a file, or a directory of
//! log files. When omitted on a terminal, free text is collected from stdin
//! until Ctrl-d.

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use triage_common::error::TriageError;

/// What the operator handed us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemInput {
    Text(String),
    File(PathBuf),
    Dir(PathBuf),
}

impl ProblemInput {
    /// Input kind for the invocation log.
    pub fn kind(&self) -> &'static str {
        match self {
            ProblemInput::Text(_) => "text",
            ProblemInput::File(_) => "file",
            ProblemInput::Dir(_) => "directory",
        }
    }
}

/// Resolve the positional argument, falling back to interactive collection.
pub fn resolve(arg: Option<String>) -> Result<ProblemInput, TriageError> {
    match arg {
        Some(raw) => Ok(classify(&raw)),
        None if io::stdin().is_terminal() => collect_from_stdin(),
        None => Err(TriageError::MissingInput),
    }
}

/// Existing file beats existing directory beats plain text.
pub fn classify(raw: &str) -> ProblemInput {
    let path = expand_tilde(raw);
    if path.is_file() {
        ProblemInput::File(path)
    } else if path.is_dir() {
        ProblemInput::Dir(path)
    } else {
        ProblemInput::Text(raw.to_string())
    }
}

fn expand_tilde(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Read free text until Ctrl-d, then classify whatever was collected.
fn collect_from_stdin() -> Result<ProblemInput, TriageError> {
    println!("Please provide the file, directory, or text to be analyzed.");
    println!("Ctrl-d on an empty line to submit:");

    let mut lines = Vec::new();
    let stdin = io::stdin();
    loop {
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line.trim_end_matches('\n').to_string());
    }

    let text = lines.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(TriageError::MissingInput);
    }
    Ok(classify(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_file_is_file_input() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let input = classify(file.path().to_str().unwrap());
        assert!(matches!(input, ProblemInput::File(_)));
        assert_eq!(input.kind(), "file");
    }

    #[test]
    fn existing_directory_is_dir_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = classify(dir.path().to_str().unwrap());
        assert!(matches!(input, ProblemInput::Dir(_)));
        assert_eq!(input.kind(), "directory");
    }

    #[test]
    fn anything_else_is_text() {
        let raw = "libvirt error code: 1, message: internal error";
        let input = classify(raw);
        assert_eq!(input, ProblemInput::Text(raw.to_string()));
        assert_eq!(input.kind(), "text");
    }
}
