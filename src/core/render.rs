//! Text rendering of a table
//!
//! Tables are laid out by `tabled`. The title becomes a header panel spanning
//! every column, and rules are placed per [`TableStyle`]. Rendering is a pure
//! function of its inputs and every emitted line ends with `\n`.

use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::style::{HorizontalLine, On, Style};
use tabled::settings::themes::BorderCorrection;
use tabled::settings::{Alignment, Panel};
use tabled::Table;

use crate::core::style::{BorderStyle, TableStyle};

/// Style with every border and rule switched on
type Grid = Style<On, On, On, On, On, On, 0, 0>;

/// Apply a grid style, either as is or with only the given rules kept
macro_rules! with_rules {
    ($table:expr, $grid:expr, $rule:expr, $lines:expr, $all_separators:expr) => {
        match ($all_separators, $lines) {
            (true, _) => {
                $table.with($grid);
            }
            (false, [first, second, ..]) => {
                $table.with(
                    $grid
                        .remove_horizontal()
                        .horizontals([(*first, $rule), (*second, $rule)]),
                );
            }
            (false, [only]) => {
                $table.with($grid.remove_horizontal().horizontals([(*only, $rule)]));
            }
            (false, []) => {
                $table.with($grid.remove_horizontal());
            }
        }
    };
}

/// Render a table to text
///
/// `title` and `headings` are `None` when disabled. An entirely empty table
/// renders as the empty string.
pub fn render_table(
    title: Option<&str>,
    headings: Option<&[String]>,
    rows: &[Vec<String>],
    style: &TableStyle,
) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(headings.map(<[String]>::len))
        .max();

    let mut builder = Builder::default();
    let mut table = match (columns, title) {
        (Some(columns), _) => {
            let columns = columns.max(1);
            for cells in headings.into_iter().chain(rows.iter().map(Vec::as_slice)) {
                builder.push_record(padded(cells, columns));
            }
            let mut table = builder.build();
            if let Some(title) = title {
                table.with(Panel::header(title));
            }
            table
        }
        // a lone title is drawn as a one cell table
        (None, Some(title)) => {
            builder.push_record([title.to_string()]);
            builder.build()
        }
        (None, None) => return String::new(),
    };

    if title.is_some() {
        table.modify(Rows::first(), Alignment::center());
    }

    let lines = header_rules(&table, title, headings, style);
    apply_border(&mut table, style, &lines);

    if title.is_some() && columns.is_some() {
        table.with(BorderCorrection::span());
    }

    let mut out = table.to_string();
    out.push('\n');
    out
}

/// Rule indices drawn even without `all_separators`: under the title and
/// under the headings, never on the bottom edge
fn header_rules(
    table: &Table,
    title: Option<&str>,
    headings: Option<&[String]>,
    style: &TableStyle,
) -> Vec<usize> {
    let title_rows = usize::from(title.is_some());
    let mut lines = Vec::with_capacity(2);
    if title.is_some() && !style.border.is_markdown() {
        lines.push(title_rows);
    }
    if headings.is_some() {
        lines.push(title_rows + 1);
    }
    lines.retain(|&line| line < table.count_rows());
    lines
}

fn apply_border(table: &mut Table, style: &TableStyle, lines: &[usize]) {
    let all = style.all_separators;
    match style.border {
        BorderStyle::Ascii => {
            with_rules!(table, Style::ascii(), HorizontalLine::full('-', '+', '+', '+'), lines, all)
        }
        BorderStyle::Unicode => {
            with_rules!(table, Style::modern(), HorizontalLine::full('─', '┼', '├', '┤'), lines, all)
        }
        BorderStyle::UnicodeRound => {
            with_rules!(table, round_grid(), HorizontalLine::full('─', '┼', '├', '┤'), lines, all)
        }
        BorderStyle::UnicodeThickEdge => {
            with_rules!(table, thick_edge_grid(), HorizontalLine::full('─', '┼', '┠', '┨'), lines, all)
        }
        // markdown only ever rules the headings
        BorderStyle::Markdown => match lines {
            [line, ..] => {
                table.with(
                    Style::markdown().horizontals([(*line, HorizontalLine::full('-', '|', '|', '|'))]),
                );
            }
            [] => {
                let none: [(usize, HorizontalLine<On, On, On>); 0] = [];
                table.with(Style::markdown().horizontals(none));
            }
        },
    }
}

fn round_grid() -> Grid {
    Style::modern()
        .corner_top_left('╭')
        .corner_top_right('╮')
        .corner_bottom_left('╰')
        .corner_bottom_right('╯')
}

fn thick_edge_grid() -> Grid {
    Style::modern()
        .top('━')
        .bottom('━')
        .left('┃')
        .right('┃')
        .corner_top_left('┏')
        .corner_top_right('┓')
        .corner_bottom_left('┗')
        .corner_bottom_right('┛')
        .intersection_top('┯')
        .intersection_bottom('┷')
        .intersection_left('┠')
        .intersection_right('┨')
}

/// Row cells, padded with empty cells to `columns`
fn padded(cells: &[String], columns: usize) -> Vec<String> {
    let mut padded = cells.to_vec();
    padded.resize(columns.max(cells.len()), String::new());
    padded
}
