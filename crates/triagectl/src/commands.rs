//! Command handlers for triagectl.

use std::time::Duration;

use indicatif::ProgressBar;
use triage_common::api::{DiagnosisApi, Report};
use triage_common::error::TriageError;
use walkdir::WalkDir;

use crate::input::ProblemInput;
use crate::kb::KbViewer;
use crate::session;
use crate::solution_menu::SolutionMenu;

/// Handle the diagnose command; returns the number of unique solutions shown.
pub fn diagnose(
    api: &impl DiagnosisApi,
    problem: ProblemInput,
    interactive: bool,
) -> Result<usize, TriageError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Consulting the diagnostics service...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let submitted = submit(api, &problem);
    spinner.finish_and_clear();

    let reports = submitted?;
    if reports.is_empty() {
        return Err(TriageError::NoResults);
    }

    let menu = SolutionMenu::build(&reports)?;
    let viewer = KbViewer::new(api);
    session::run(&menu, &viewer, interactive)?;
    Ok(menu.solution_count())
}

/// One submission per problem report; a directory submits each file it holds.
fn submit(api: &impl DiagnosisApi, problem: &ProblemInput) -> Result<Vec<Report>, TriageError> {
    match problem {
        ProblemInput::Text(text) => api.diagnose_text(text),
        ProblemInput::File(path) => api.diagnose_file(path),
        ProblemInput::Dir(path) => {
            let mut reports = Vec::new();
            for entry in WalkDir::new(path) {
                let entry = entry.map_err(|e| TriageError::Io(e.into()))?;
                if entry.file_type().is_file() {
                    reports.extend(api.diagnose_file(entry.path())?);
                }
            }
            Ok(reports)
        }
    }
}
