//! Border styles and table style options

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Glyph set used to draw table borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    Ascii,
    Markdown,
    Unicode,
    UnicodeRound,
    UnicodeThickEdge,
}

impl BorderStyle {
    /// Every style, in the order they are listed to users
    pub const ALL: [BorderStyle; 5] = [
        BorderStyle::Ascii,
        BorderStyle::Markdown,
        BorderStyle::Unicode,
        BorderStyle::UnicodeRound,
        BorderStyle::UnicodeThickEdge,
    ];

    /// Name as typed on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Ascii => "ascii",
            BorderStyle::Markdown => "markdown",
            BorderStyle::Unicode => "unicode",
            BorderStyle::UnicodeRound => "unicode_round",
            BorderStyle::UnicodeThickEdge => "unicode_thick_edge",
        }
    }

    /// Comma separated list of every style name
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Markdown has no outer rules and only a rule under the headings
    pub fn is_markdown(&self) -> bool {
        matches!(self, BorderStyle::Markdown)
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Style options applied when rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStyle {
    pub border: BorderStyle,
    /// Draw a rule between every data row
    pub all_separators: bool,
}
