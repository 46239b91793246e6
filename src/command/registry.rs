//! Static command registry and help text

use std::fmt;
use std::str::FromStr;

/// Every command the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Exit,
    Table,
    Clear,
    Save,
    Add,
    Remove,
    SetTitle,
    SetHeadings,
    SetBorderStyle,
    SetAllSeparators,
}

/// Name, usage and description of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Registry in the order commands are listed by `help`
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Help,
        name: "help",
        usage: "[command]",
        description: "Displays this help message, or the usage of one command",
    },
    CommandSpec {
        command: Command::Exit,
        name: "exit",
        usage: "",
        description: "Exits the program",
    },
    CommandSpec {
        command: Command::Table,
        name: "table",
        usage: "",
        description: "Displays the current table",
    },
    CommandSpec {
        command: Command::Clear,
        name: "clear",
        usage: "",
        description: "Removes every row from the table",
    },
    CommandSpec {
        command: Command::Save,
        name: "save",
        usage: "<filename>",
        description: "Saves the current table to a file (.txt is appended if missing)",
    },
    CommandSpec {
        command: Command::Add,
        name: "add",
        usage: "[index] <cell>...",
        description: "Adds a row at the specified index. If no index is specified, the row is added at the end. Quote cells that contain spaces",
    },
    CommandSpec {
        command: Command::Remove,
        name: "remove",
        usage: "[index]",
        description: "Removes the row at the specified index. If no index is specified, the last row is removed",
    },
    CommandSpec {
        command: Command::SetTitle,
        name: "set_title",
        usage: "[title]",
        description: "Sets the title of the table. If no title is specified, the title is disabled",
    },
    CommandSpec {
        command: Command::SetHeadings,
        name: "set_headings",
        usage: "[heading]...",
        description: "Sets the headings of the table. If no headings are specified, the headings are disabled",
    },
    CommandSpec {
        command: Command::SetBorderStyle,
        name: "set_border_style",
        usage: "<style>",
        description: "Sets the border style: ascii, markdown, unicode, unicode_round, unicode_thick_edge",
    },
    CommandSpec {
        command: Command::SetAllSeparators,
        name: "set_all_separators",
        usage: "<true|false>",
        description: "Enables or disables a separator between every row",
    },
];

impl Command {
    /// Registry entry for this command
    pub fn spec(&self) -> &'static CommandSpec {
        let index = match self {
            Command::Help => 0,
            Command::Exit => 1,
            Command::Table => 2,
            Command::Clear => 3,
            Command::Save => 4,
            Command::Add => 5,
            Command::Remove => 6,
            Command::SetTitle => 7,
            Command::SetHeadings => 8,
            Command::SetBorderStyle => 9,
            Command::SetAllSeparators => 10,
        };
        &COMMANDS[index]
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// Whether running the command changes the table
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Clear
                | Command::Add
                | Command::Remove
                | Command::SetTitle
                | Command::SetHeadings
                | Command::SetBorderStyle
                | Command::SetAllSeparators
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    /// Case-sensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == s)
            .map(|spec| spec.command)
            .ok_or_else(|| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_round_trips() {
        for spec in COMMANDS {
            assert_eq!(spec.name.parse::<Command>(), Ok(spec.command));
            assert_eq!(spec.command.spec(), spec);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!("Help".parse::<Command>().is_err());
        assert!("ADD".parse::<Command>().is_err());
        assert!("save_as".parse::<Command>().is_err());
    }

    #[test]
    fn test_registry_has_eleven_unique_commands() {
        assert_eq!(COMMANDS.len(), 11);
        let mut names: Vec<_> = COMMANDS.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_queries_do_not_mutate() {
        for command in [Command::Help, Command::Exit, Command::Table, Command::Save] {
            assert!(!command.is_mutating(), "{command} should not mutate");
        }
        assert!(Command::Add.is_mutating());
        assert!(Command::Clear.is_mutating());
    }
}
