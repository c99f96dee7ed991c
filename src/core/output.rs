//! Colored message helpers for consistent CLI presentation.
//!
//! All user-facing messages, including failures, go to standard output.
//! Red for errors, green checkmark for successes, white for neutral text.

use colored::*;

/// Print an error message: `✕ Error: <message>` with surrounding blank lines.
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Print a success message: `✓ <message>`.
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Print a neutral informational message with surrounding blank lines.
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Print a section header: `<header>:` with surrounding blank lines.
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
