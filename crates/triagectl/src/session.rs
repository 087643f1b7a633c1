//! Interactive and non-interactive presentation of the solution menu.

use std::io::{self, BufRead, IsTerminal, Write};

use owo_colors::OwoColorize;
use triage_common::error::TriageError;
use triage_common::ui;

use crate::kb::SolutionViewer;
use crate::pager;
use crate::solution_menu::{MenuAction, MenuEntry, SolutionMenu};

/// Whether this invocation can hold a prompt loop.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Present the menu: a prompt loop when interactive, a plain dump otherwise.
pub fn run(
    menu: &SolutionMenu,
    viewer: &dyn SolutionViewer,
    interactive: bool,
) -> Result<(), TriageError> {
    if !interactive {
        print!("{}", menu.aggregate_doc());
        io::stdout().flush()?;
        return Ok(());
    }

    println!();
    println!("Type the number of the solution to view or 'e' to return to the previous menu.");
    println!();
    for (i, entry) in menu.entries().iter().enumerate() {
        println!("   {}  {}", format!("[{}]", i + 1).cyan(), entry.label);
    }
    println!();

    loop {
        print!("{} ", "Select a solution:".bright_magenta());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Ctrl-d
            break;
        }
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }
        if choice.eq_ignore_ascii_case("e") || choice.eq_ignore_ascii_case("q") {
            break;
        }

        match choice.parse::<usize>() {
            Ok(n) if (1..=menu.entries().len()).contains(&n) => {
                dispatch(menu, &menu.entries()[n - 1], viewer)?;
            }
            _ => {
                println!(
                    "   {}  Please enter a number between 1 and {}",
                    "!".yellow(),
                    menu.entries().len()
                );
            }
        }
    }

    Ok(())
}

fn dispatch(
    menu: &SolutionMenu,
    entry: &MenuEntry,
    viewer: &dyn SolutionViewer,
) -> Result<(), TriageError> {
    match &entry.action {
        MenuAction::ShowAll => pager::page(&menu.aggregate_doc()),
        MenuAction::ShowDetail { solution_id } => {
            // A failed lookup returns the operator to the menu instead of
            // tearing the session down.
            if let Err(err) = viewer.view(solution_id) {
                tracing::warn!(error = %err, solution_id = %solution_id, "knowledge-base lookup failed");
                ui::print_err(&err.to_string());
            }
            Ok(())
        }
    }
}
