//! CLI module - argument parsing, session loop and terminal output

pub mod args;
pub mod output;
pub mod session;

pub use args::Cli;
pub use session::Session;
