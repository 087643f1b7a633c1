//! Menu construction and follow-up lookup against a fake diagnostics API.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use triage_common::api::{DiagnosisApi, Link, Report, Solution};
use triage_common::error::TriageError;
use triagectl::commands;
use triagectl::input::ProblemInput;
use triagectl::kb::{KbViewer, SolutionViewer};

struct FakeApi {
    reports: Vec<Report>,
    files: RefCell<Vec<PathBuf>>,
    fetched: RefCell<Vec<String>>,
}

impl FakeApi {
    fn new(reports: Vec<Report>) -> Self {
        Self {
            reports,
            files: RefCell::new(Vec::new()),
            fetched: RefCell::new(Vec::new()),
        }
    }
}

impl DiagnosisApi for FakeApi {
    fn diagnose_text(&self, _text: &str) -> Result<Vec<Report>, TriageError> {
        Ok(self.reports.clone())
    }

    fn diagnose_file(&self, path: &Path) -> Result<Vec<Report>, TriageError> {
        self.files.borrow_mut().push(path.to_path_buf());
        Ok(self.reports.clone())
    }

    fn get_solution(&self, solution_id: &str) -> Result<Solution, TriageError> {
        self.fetched.borrow_mut().push(solution_id.to_string());
        Ok(Solution {
            id: solution_id.to_string(),
            title: "Canned solution".to_string(),
            uri: format!("https://api.example.com/rs/solutions/{}", solution_id),
            body: "Do the thing.".to_string(),
        })
    }
}

fn link(uri: &str, value: &str) -> Link {
    Link {
        uri: uri.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn text_input_builds_deduplicated_menu() {
    let api = FakeApi::new(vec![Report {
        links: vec![
            link("https://api.example.com/rs/solutions/123", "Fix A"),
            link("https://api.example.com/rs/solutions/123", "Fix A dup"),
            link("https://api.example.com/rs/solutions/456", "Fix B"),
        ],
    }]);

    let shown = commands::diagnose(&api, ProblemInput::Text("kernel panic".to_string()), false).unwrap();
    assert_eq!(shown, 2);
}

#[test]
fn empty_report_list_surfaces_no_results() {
    let api = FakeApi::new(vec![]);
    let err = commands::diagnose(&api, ProblemInput::Text("whatever".to_string()), false).unwrap_err();
    assert!(matches!(err, TriageError::NoResults));
}

#[test]
fn reports_without_links_surface_no_results() {
    let api = FakeApi::new(vec![Report { links: vec![] }]);
    let err = commands::diagnose(&api, ProblemInput::Text("whatever".to_string()), false).unwrap_err();
    assert!(matches!(err, TriageError::NoResults));
}

#[test]
fn directory_input_submits_each_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("boot.log"), "oops").unwrap();
    std::fs::write(dir.path().join("dmesg.log"), "oops again").unwrap();

    let api = FakeApi::new(vec![Report {
        links: vec![link("https://api.example.com/rs/solutions/7", "Fix")],
    }]);

    let shown = commands::diagnose(&api, ProblemInput::Dir(dir.path().to_path_buf()), false).unwrap();
    // the same solution came back for both files and collapsed to one entry
    assert_eq!(shown, 1);
    assert_eq!(api.files.borrow().len(), 2);
}

#[test]
fn viewer_fetches_the_selected_solution() {
    let api = FakeApi::new(vec![]);
    let viewer = KbViewer::new(&api);

    viewer.view("8675309").unwrap();
    assert_eq!(*api.fetched.borrow(), vec!["8675309".to_string()]);
}
