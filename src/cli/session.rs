//! Interactive session loop
//!
//! Reads one line at a time, hands it to the [`CommandProcessor`] and prints
//! the outcome. When stdin is a terminal lines come from a `dialoguer`
//! prompt with history; otherwise stdin is read line by line so a session
//! can be scripted.

use dialoguer::{theme::ColorfulTheme, BasicHistory, Input};
use miette::{IntoDiagnostic, Result};
use std::borrow::Cow;
use std::io::{self, BufRead, IsTerminal};

use crate::cli::output::{format_banner, print_outcome};
use crate::command::{CommandProcessor, Outcome};

const HISTORY_SIZE: usize = 256;

pub struct Session {
    processor: CommandProcessor,
    quiet: bool,
}

impl Session {
    pub fn new(processor: CommandProcessor, quiet: bool) -> Self {
        Self { processor, quiet }
    }

    pub fn processor(&self) -> &CommandProcessor {
        &self.processor
    }

    /// Run until `exit` or the end of input
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            self.run_interactive()
        } else {
            self.run_lines(stdin.lock())
        }
    }

    /// Process every line from a reader, stopping early on `exit`
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than ending the
    /// session.
    pub fn run_lines<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).into_diagnostic()? == 0 {
                log::debug!("end of input");
                return Ok(());
            }
            let decoded = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = decoded {
                log::warn!("input line was not valid UTF-8, invalid bytes replaced");
            }
            if !self.handle(decoded.trim_end_matches(['\n', '\r'])) {
                return Ok(());
            }
        }
    }

    fn run_interactive(&mut self) -> Result<()> {
        if !self.quiet {
            print!("{}", format_banner());
        }

        let theme = ColorfulTheme::default();
        let mut history = BasicHistory::new()
            .max_entries(HISTORY_SIZE)
            .no_duplicates(true);

        loop {
            let line: String = match Input::with_theme(&theme)
                .with_prompt(">>>")
                .allow_empty(true)
                .history_with(&mut history)
                .interact_text()
            {
                Ok(line) => line,
                // Ctrl-C or a closed terminal ends the session quietly
                Err(err) => {
                    log::debug!("input closed: {}", err);
                    return Ok(());
                }
            };
            if !self.handle(&line) {
                return Ok(());
            }
        }
    }

    /// Run one line; false once the session should end
    fn handle(&mut self, line: &str) -> bool {
        let outcome = self.processor.execute(line);
        print_outcome(&outcome);
        !matches!(outcome, Outcome::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_run_lines_applies_every_command() {
        let mut session = Session::new(CommandProcessor::default(), true);
        let script = "set_title Pets\nadd Rex 3\n\nadd 0 Tom 12\nbogus\n";
        session.run_lines(Cursor::new(script)).unwrap();

        let table = session.processor().table();
        assert_eq!(table.title(), Some("Pets"));
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0][0], "Tom");
    }

    #[test]
    fn test_run_lines_survives_invalid_utf8() {
        let mut session = Session::new(CommandProcessor::default(), true);
        let script: &[u8] = b"add a\nadd \xff\xfe\nadd b\r\n";
        session.run_lines(script).unwrap();

        let rows = session.processor().table().rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["\u{FFFD}\u{FFFD}".to_string()]);
        assert_eq!(rows[2], vec!["b".to_string()]);
    }

    #[test]
    fn test_run_lines_without_trailing_newline() {
        let mut session = Session::new(CommandProcessor::default(), true);
        session.run_lines(Cursor::new("add a\nadd b")).unwrap();
        assert_eq!(session.processor().table().rows().len(), 2);
    }

    #[test]
    fn test_run_lines_stops_at_exit() {
        let mut session = Session::new(CommandProcessor::default(), true);
        session
            .run_lines(Cursor::new("add a\nexit\nadd b\n"))
            .unwrap();
        assert_eq!(session.processor().table().rows().len(), 1);
    }
}
