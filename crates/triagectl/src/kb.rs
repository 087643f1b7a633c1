//! Follow-up knowledge-base lookup for a selected solution.
//!
//! The menu session hands a solution id to a `SolutionViewer`; the production
//! viewer fetches the document and pages it. The knowledge-base plugin's own
//! search and browse surface lives elsewhere.

use triage_common::api::{DiagnosisApi, Solution};
use triage_common::error::TriageError;
use triage_common::ui::{colors, MAX_RULE};

use crate::pager;

/// Takes over interactive control for one solution id.
pub trait SolutionViewer {
    fn view(&self, solution_id: &str) -> Result<(), TriageError>;
}

/// Production viewer: fetch the solution document and page it.
pub struct KbViewer<'a, A: DiagnosisApi> {
    api: &'a A,
}

impl<'a, A: DiagnosisApi> KbViewer<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }
}

impl<'a, A: DiagnosisApi> SolutionViewer for KbViewer<'a, A> {
    fn view(&self, solution_id: &str) -> Result<(), TriageError> {
        let solution = self.api.get_solution(solution_id)?;
        pager::page(&render_solution(&solution))
    }
}

/// Render a fetched solution document for the pager.
pub fn render_solution(solution: &Solution) -> String {
    let mut doc = String::new();
    doc.push_str(&format!(
        "{}{}{}\n",
        colors::HEADER,
        solution.title,
        colors::RESET
    ));
    doc.push_str(&format!("{:<8} {}\n", "ID", solution.id));
    if !solution.uri.is_empty() {
        doc.push_str(&format!("{:<8} {}\n", "URL", solution.uri));
    }
    doc.push_str(&format!(
        "{}{}{}\n\n",
        colors::DIM,
        "-".repeat(MAX_RULE),
        colors::RESET
    ));
    doc.push_str(&solution.body);
    doc.push('\n');
    doc
}
