//! Command-line arguments

use clap::Parser;

use crate::core::style::{BorderStyle, TableStyle};

/// Build ASCII and Unicode tables interactively
///
/// Commands are read one per line, from the terminal or from piped stdin.
/// Type `help` inside the session for the list of commands.
#[derive(Parser, Debug)]
#[command(name = "tablesmith", version, about)]
pub struct Cli {
    /// Initial border style
    #[arg(long, value_enum, default_value_t = BorderStyle::Ascii)]
    pub border: BorderStyle,

    /// Start with a separator between every row
    #[arg(long)]
    pub all_separators: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Skip the welcome banner
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Table style the session starts with
    pub fn table_style(&self) -> TableStyle {
        TableStyle {
            border: self.border,
            all_separators: self.all_separators,
        }
    }
}
