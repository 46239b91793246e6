//! Terminal output for command outcomes

use console::style;

use crate::command::{CommandError, CommandSpec, Outcome, COMMANDS};

/// Print an outcome to the terminal
///
/// Tables, help and confirmations go to stdout; errors go to stderr.
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Nothing => {}
        Outcome::Table(text) if text.is_empty() => {
            println!("{}", style("(the table is empty)").dim());
        }
        Outcome::Table(text) => print!("{}", text),
        Outcome::Saved { path } => println!(
            "{} {}",
            style("File saved successfully as").green(),
            style(path.display()).cyan()
        ),
        Outcome::Help(specs) => print!("{}", format_help(specs)),
        Outcome::Error(err) => eprint!("{}", format_error(err)),
        Outcome::Exit => println!("{}", style("Goodbye!").red()),
    }
}

/// Welcome banner shown at the start of an interactive session
pub fn format_banner() -> String {
    format!(
        "{} {}\n{} {} {}\n{} {} {} {} {}\n",
        style("Welcome to the interactive").green(),
        style("tablesmith!").bright().blue(),
        style("Type").green(),
        style("help").yellow(),
        style("for a list of commands.").green(),
        style("Type").green(),
        style("exit").red(),
        style("or press").green(),
        style("CTRL+C").red(),
        style("to quit.").green(),
    )
}

/// Help listing; the full registry gets an introduction
pub fn format_help(specs: &[&CommandSpec]) -> String {
    let mut out = String::new();
    if specs.len() == COMMANDS.len() {
        out.push_str(&format!(
            "{} {}\n{}\n",
            style("tablesmith").bright().blue(),
            style("helps you create ascii tables right in your terminal!").green(),
            style("Available commands:").green(),
        ));
    }
    for spec in specs {
        out.push_str(&format!("  {}", style(spec.name).yellow().bright()));
        if !spec.usage.is_empty() {
            out.push_str(&format!(" {}", style(spec.usage).blue().italic()));
        }
        out.push_str(&format!(" - {}\n", spec.description));
    }
    out
}

/// Error message, with a pointer to `help` for unknown commands
///
/// Bad input is shown in red; failures of the system itself are prefixed
/// with `Error:` in bold.
pub fn format_error(err: &CommandError) -> String {
    let mut out = if err.is_validation() {
        format!("{}\n", style(err).red())
    } else {
        format!("{} {}\n", style("Error:").red().bold(), style(err).red())
    };
    if matches!(err, CommandError::UnknownCommand(_)) {
        out.push_str(&format!(
            "{} {} {}\n",
            style("Type").green(),
            style("help").yellow(),
            style("for a list of commands.").green()
        ));
    }
    out
}
