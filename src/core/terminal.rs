//! Prompt and screen glue for the interactive loops.
//!
//! [`Terminal`] is generic over its input source so the search and selection
//! loops can be driven from a buffer in tests and from locked stdin in
//! production. Output goes straight to stdout.

use crate::core::error::Result;
use std::io::{self, BufRead, Write};

pub struct Terminal<R: BufRead> {
    input: R,
}

impl<R: BufRead> Terminal<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print a prompt without a trailing newline and read one line of input.
    /// Returns the trimmed line, or `None` once the input is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Clear the screen and move the cursor home.
    pub fn clear(&self) {
        print!("\x1B[2J\x1B[H");
        let _ = io::stdout().flush();
    }
}

/// Terminal reading from the process's standard input.
pub fn stdin_terminal() -> Terminal<io::BufReader<io::Stdin>> {
    Terminal::new(io::BufReader::new(io::stdin()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_input_line() {
        let mut term = Terminal::new(Cursor::new("  alpha  \n"));
        let line = term.prompt("query: ").unwrap();
        assert_eq!(line, Some("alpha".to_string()));
    }

    #[test]
    fn test_prompt_returns_none_on_eof() {
        let mut term = Terminal::new(Cursor::new(""));
        assert_eq!(term.prompt("query: ").unwrap(), None);
    }

    #[test]
    fn test_prompt_reads_successive_lines() {
        let mut term = Terminal::new(Cursor::new("one\ntwo\n"));
        assert_eq!(term.prompt("> ").unwrap(), Some("one".to_string()));
        assert_eq!(term.prompt("> ").unwrap(), Some("two".to_string()));
        assert_eq!(term.prompt("> ").unwrap(), None);
    }
}
