//! Command parsing and dispatch
//!
//! One raw input line goes in, one [`Outcome`] comes out. Nothing here
//! prints or reads from the terminal.

pub mod parse;
pub mod processor;
pub mod registry;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::style::BorderStyle;

pub use processor::CommandProcessor;
pub use registry::{Command, CommandSpec, COMMANDS};

/// Result of running one input line
#[derive(Debug)]
pub enum Outcome {
    /// Blank input, nothing to show
    Nothing,
    /// The current table, rendered
    Table(String),
    /// The table was written to `path`
    Saved { path: PathBuf },
    /// Help entries to list
    Help(Vec<&'static CommandSpec>),
    /// The command was rejected or failed; the table is unchanged
    Error(CommandError),
    /// The session should end
    Exit,
}

/// Errors surfaced to the user as messages
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid border style '{0}'. The border style can only be one of the following: {valid}", valid = BorderStyle::names())]
    InvalidBorderStyle(String),

    #[error("Invalid value '{0}'. The all_separators value can only be true or false")]
    InvalidAllSeparators(String),

    #[error("Please specify a filename")]
    MissingFilename,

    #[error("Failed to save table to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    /// Whether the input itself was at fault, as opposed to the system
    pub fn is_validation(&self) -> bool {
        !matches!(self, CommandError::Save { .. })
    }
}
