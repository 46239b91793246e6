//! Maps input lines onto table operations

use std::fs;
use std::path::PathBuf;

use crate::command::parse::{cell_tokens, parse_integer, plain_tokens, split_command};
use crate::command::registry::{Command, COMMANDS};
use crate::command::{CommandError, Outcome};
use crate::core::style::BorderStyle;
use crate::core::table::TableState;

type CommandResult = Result<Outcome, CommandError>;

/// Owns the session's table and applies commands to it
#[derive(Debug, Default)]
pub struct CommandProcessor {
    table: TableState,
}

impl CommandProcessor {
    pub fn new(table: TableState) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Parse and run one line of input
    pub fn execute(&mut self, line: &str) -> Outcome {
        let Some((name, args)) = split_command(line) else {
            return Outcome::Nothing;
        };

        let command = match name.parse::<Command>() {
            Ok(command) => command,
            Err(name) => {
                log::debug!("unknown command {:?}", name);
                return Outcome::Error(CommandError::UnknownCommand(name));
            }
        };
        log::debug!(
            "running {} (mutating: {}) with args {:?}",
            command,
            command.is_mutating(),
            args
        );

        self.dispatch(command, args).unwrap_or_else(Outcome::Error)
    }

    fn dispatch(&mut self, command: Command, args: &str) -> CommandResult {
        match command {
            Command::Help => self.help(args),
            Command::Exit => Ok(Outcome::Exit),
            Command::Table => Ok(self.rendered()),
            Command::Clear => {
                self.table.clear();
                Ok(self.rendered())
            }
            Command::Save => self.save(args),
            Command::Add => self.add(args),
            Command::Remove => self.remove(args),
            Command::SetTitle => {
                self.table.set_title(args.trim_end());
                Ok(self.rendered())
            }
            Command::SetHeadings => {
                self.table.set_headings(cell_tokens(args));
                Ok(self.rendered())
            }
            Command::SetBorderStyle => self.set_border_style(args),
            Command::SetAllSeparators => self.set_all_separators(args),
        }
    }

    fn rendered(&self) -> Outcome {
        Outcome::Table(self.table.render())
    }

    fn help(&self, args: &str) -> CommandResult {
        match plain_tokens(args).first() {
            None => Ok(Outcome::Help(COMMANDS.iter().collect())),
            Some(name) => name
                .parse::<Command>()
                .map(|command| Outcome::Help(vec![command.spec()]))
                .map_err(CommandError::UnknownCommand),
        }
    }

    fn save(&self, args: &str) -> CommandResult {
        let tokens = plain_tokens(args);
        let name = tokens.first().ok_or(CommandError::MissingFilename)?;
        let path = save_path(name);

        fs::write(&path, self.table.render()).map_err(|source| {
            log::warn!("failed to write {}: {}", path.display(), source);
            CommandError::Save {
                path: path.clone(),
                source,
            }
        })?;
        log::debug!("saved table to {}", path.display());

        Ok(Outcome::Saved { path })
    }

    fn add(&mut self, args: &str) -> CommandResult {
        let mut cells = cell_tokens(args);
        let index = cells.first().and_then(|first| parse_integer(first));
        if index.is_some() {
            cells.remove(0);
        }
        self.table.insert_row(index, cells);
        Ok(self.rendered())
    }

    fn remove(&mut self, args: &str) -> CommandResult {
        match plain_tokens(args).first() {
            None => {
                self.table.remove_row(None);
            }
            Some(token) => match parse_integer(token) {
                Some(index) => {
                    self.table.remove_row(Some(index));
                }
                None => log::debug!("remove ignored non-integer index {:?}", token),
            },
        }
        Ok(self.rendered())
    }

    fn set_border_style(&mut self, args: &str) -> CommandResult {
        let value = plain_tokens(args).into_iter().next().unwrap_or_default();
        let border = value
            .parse::<BorderStyle>()
            .map_err(CommandError::InvalidBorderStyle)?;
        self.table.set_border(border);
        Ok(self.rendered())
    }

    fn set_all_separators(&mut self, args: &str) -> CommandResult {
        let value = plain_tokens(args).into_iter().next().unwrap_or_default();
        let enabled = match value.as_str() {
            "true" => true,
            "false" => false,
            _ => return Err(CommandError::InvalidAllSeparators(value)),
        };
        self.table.set_all_separators(enabled);
        Ok(self.rendered())
    }
}

/// File name a table is saved under
///
/// `.txt` is appended unless the name already contains it somewhere, so
/// `my.txt.backup` is kept as is.
pub fn save_path(name: &str) -> PathBuf {
    if name.contains(".txt") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.txt"))
    }
}
