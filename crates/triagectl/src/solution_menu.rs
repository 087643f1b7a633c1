//! Solution menu construction for the diagnose command.
//!
//! The diagnostics API can return the same solution several times across the
//! problem reports of one submission. This module deduplicates the links by
//! the trailing path segment of their URI, renders one detail block per
//! unique solution, and exposes the selectable menu the session presents.

use std::collections::HashMap;

use triage_common::api::{Link, Report};
use triage_common::error::TriageError;
use triage_common::ui::{colors, MAX_RULE};

/// Label of the synthetic aggregate entry.
const SHOW_ALL_LABEL: &str = "Display all solution summaries";

/// What selecting a menu entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Page through every detail block at once.
    ShowAll,
    /// Launch the knowledge-base lookup for one solution.
    ShowDetail { solution_id: String },
}

/// One selectable line of the solution menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

/// Deduplicated solution menu for one diagnose invocation.
///
/// Entries keep first-seen order; membership is tracked through the id-keyed
/// section map, so rebuilding from the same reports yields the same menu.
/// Built fresh per invocation and discarded with the session.
#[derive(Debug)]
pub struct SolutionMenu {
    entries: Vec<MenuEntry>,
    sections: HashMap<String, String>,
}

impl SolutionMenu {
    /// Build the menu from every link of every report.
    ///
    /// The first link seen for a given id wins. Fails with `NoResults` when
    /// no report carries any link, and with `Parse` on a malformed link
    /// record; no partial menu is ever returned.
    pub fn build(reports: &[Report]) -> Result<Self, TriageError> {
        let mut entries = vec![MenuEntry {
            label: SHOW_ALL_LABEL.to_string(),
            action: MenuAction::ShowAll,
        }];
        let mut sections: HashMap<String, String> = HashMap::new();

        for report in reports {
            for link in &report.links {
                let id = solution_id(&link.uri).ok_or_else(|| {
                    TriageError::Parse(format!("link without a solution id: {:?}", link.uri))
                })?;
                if sections.contains_key(id) {
                    continue;
                }

                entries.push(MenuEntry {
                    label: format!("[{:>7}] {}", id, link.value),
                    action: MenuAction::ShowDetail {
                        solution_id: id.to_string(),
                    },
                });
                sections.insert(id.to_string(), detail_block(id, link));
            }
        }

        if sections.is_empty() {
            return Err(TriageError::NoResults);
        }

        Ok(Self { entries, sections })
    }

    /// Menu entries in presentation order; entry 0 is the aggregate.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Detail block for a non-aggregate entry.
    pub fn section(&self, entry: &MenuEntry) -> Option<&str> {
        match &entry.action {
            MenuAction::ShowAll => None,
            MenuAction::ShowDetail { solution_id } => {
                self.sections.get(solution_id).map(String::as_str)
            }
        }
    }

    /// Every detail block concatenated in menu order.
    pub fn aggregate_doc(&self) -> String {
        self.entries
            .iter()
            .filter_map(|entry| self.section(entry))
            .collect()
    }

    /// Number of unique solutions behind the menu.
    pub fn solution_count(&self) -> usize {
        self.sections.len()
    }
}

/// Trailing path segment of a link URI, the stable solution identifier.
fn solution_id(uri: &str) -> Option<&str> {
    let path = uri
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(uri);
    match path.rsplit('/').next() {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Strip API plumbing from a URI so the operator sees the browsable form.
fn sanitize_uri(uri: &str) -> String {
    uri.replace("api.", "").replace("/rs", "")
}

fn detail_block(id: &str, link: &Link) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("{:<8} {:<70}\n", "ID", id));
    doc.push_str(&format!("{:<8} {:<70}\n", "Title:", link.value));
    doc.push_str(&format!("{:<8} {:<70}", "URL", sanitize_uri(&link.uri)));
    doc.push_str(&format!(
        "\n\n{}{}{}\n\n",
        colors::BOLD,
        "-".repeat(MAX_RULE),
        colors::RESET
    ));
    doc
}
