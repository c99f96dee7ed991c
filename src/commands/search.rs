//! Interactive search over the collected entries.
//!
//! Two nested loops: the outer query loop filters the entry list by
//! substring and prints numbered, highlighted results; the inner selection
//! loop resolves a 1-based index and hands the chosen entry to the launcher.
//! `exit` or `q` (and end of input) leave the current loop.

use crate::core::{
    collect_entries, find_matches, highlight, open_in_file_browser, print_error, print_info,
    print_section_header, stdin_terminal, Registry, Result, SearchHit, Terminal,
};
use colored::*;
use std::io::BufRead;
use std::path::PathBuf;

const EXIT_SENTINELS: [&str; 2] = ["exit", "q"];

/// Load the registry, print the root list, collect entries once, and run
/// the interactive search loop on stdin.
pub fn execute_search() -> Result<()> {
    let registry = Registry::load_default()?;

    if registry.roots().is_empty() {
        print_info("No search roots in the registry. Add one with --add <DIR>.");
        return Ok(());
    }

    print_section_header("Search Roots");
    for (i, root) in registry.roots().iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).cyan(), root.green());
    }
    println!();

    let entries = collect_entries(registry.roots());
    log::debug!(
        "Collected {} entries from {} roots",
        entries.len(),
        registry.roots().len()
    );

    run_search_loop(&entries, &mut stdin_terminal())
}

/// Query loop: filter, display, delegate to the selection loop, clear, and
/// prompt again until the exit sentinel or end of input.
pub fn run_search_loop<R: BufRead>(entries: &[PathBuf], term: &mut Terminal<R>) -> Result<()> {
    loop {
        let Some(query) = term.prompt("Enter a search query or 'exit' to quit: ")? else {
            break;
        };
        if EXIT_SENTINELS.contains(&query.as_str()) {
            break;
        }

        let hits = find_matches(entries, &query);
        if hits.is_empty() {
            println!("No results found");
            continue;
        }

        for (i, hit) in hits.iter().enumerate() {
            println!("{} {}", format!("{}.", i + 1).cyan(), highlight(&hit.name, hit.span));
        }

        selection_loop(&hits, term)?;
        term.clear();
    }

    term.clear();
    Ok(())
}

/// Selection loop: accept a 1-based index or the exit sentinel. Invalid
/// input re-prompts; a successful launch returns to the query loop, a
/// failed launch is reported and the loop continues.
fn selection_loop<R: BufRead>(hits: &[SearchHit], term: &mut Terminal<R>) -> Result<()> {
    loop {
        let Some(choice) =
            term.prompt("Enter the number of a directory to open or 'exit' to go back: ")?
        else {
            return Ok(());
        };
        if EXIT_SENTINELS.contains(&choice.as_str()) {
            return Ok(());
        }

        let index = match choice.parse::<usize>() {
            Ok(n) if (1..=hits.len()).contains(&n) => n,
            _ => {
                print_error("Invalid input");
                continue;
            }
        };

        let hit = &hits[index - 1];
        println!("Opening directory: {}", hit.name.yellow());
        match open_in_file_browser(&hit.path) {
            Ok(()) => return Ok(()),
            Err(e) => print_error(&format!("Failed to open '{}': {e}", hit.path.display())),
        }
    }
}
