//! Table state model
//!
//! [`TableState`] holds everything that describes the table being built:
//! title, headings, rows and style. It knows nothing about commands or
//! argument parsing. Row indices are never rejected; they are clamped to the
//! nearest valid position instead.

use crate::core::render::render_table;
use crate::core::style::{BorderStyle, TableStyle};

/// One row of cells
pub type Row = Vec<String>;

/// Mutable table configuration for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    title: String,
    title_enabled: bool,
    headings: Vec<String>,
    headings_enabled: bool,
    rows: Vec<Row>,
    style: TableStyle,
}

impl TableState {
    /// Create an empty table with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given style
    pub fn with_style(style: TableStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Title, if enabled
    pub fn title(&self) -> Option<&str> {
        self.title_enabled.then_some(self.title.as_str())
    }

    /// Headings, if enabled
    pub fn headings(&self) -> Option<&[String]> {
        self.headings_enabled.then_some(self.headings.as_slice())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Set the title; an empty title disables it
    pub fn set_title(&mut self, text: &str) {
        if text.is_empty() {
            self.title_enabled = false;
        } else {
            self.title = text.to_string();
            self.title_enabled = true;
        }
    }

    /// Set the headings; an empty list disables them
    pub fn set_headings(&mut self, headings: Vec<String>) {
        if headings.is_empty() {
            self.headings_enabled = false;
        } else {
            self.headings = headings;
            self.headings_enabled = true;
        }
    }

    /// Insert a row, returning the index it landed at
    ///
    /// `None` appends. Indices past the end append; negative indices insert
    /// at the front.
    pub fn insert_row(&mut self, index: Option<i64>, row: Row) -> usize {
        let len = self.rows.len();
        let at = index.map_or(len, |i| clamp(i, len));
        if index.is_some_and(|i| i != at as i64) {
            log::debug!("insert index {:?} clamped to {}", index, at);
        }
        self.rows.insert(at, row);
        at
    }

    /// Remove a row, returning it
    ///
    /// `None` removes the last row. Indices past the end remove the last
    /// row; negative indices remove the first. Removing from an empty table
    /// does nothing.
    pub fn remove_row(&mut self, index: Option<i64>) -> Option<Row> {
        let last = self.rows.len().checked_sub(1)?;
        let at = index.map_or(last, |i| clamp(i, last));
        if index.is_some_and(|i| i != at as i64) {
            log::debug!("remove index {:?} clamped to {}", index, at);
        }
        Some(self.rows.remove(at))
    }

    /// Remove every row; title, headings and style are kept
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn set_border(&mut self, border: BorderStyle) {
        self.style.border = border;
    }

    pub fn set_all_separators(&mut self, enabled: bool) {
        self.style.all_separators = enabled;
    }

    /// Render the current table
    pub fn render(&self) -> String {
        render_table(self.title(), self.headings(), &self.rows, &self.style)
    }
}

fn clamp(index: i64, max: usize) -> usize {
    usize::try_from(index).map_or(0, |i| i.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn firsts(table: &TableState) -> Vec<&str> {
        table.rows().iter().map(|r| r[0].as_str()).collect()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = TableState::new();
        assert_eq!(table.title(), None);
        assert_eq!(table.headings(), None);
        assert!(table.rows().is_empty());
        assert_eq!(table.style().border, BorderStyle::Ascii);
        assert_eq!(table.render(), "");
    }

    #[test]
    fn test_set_title_enables_and_disables() {
        let mut table = TableState::new();
        table.set_title("X");
        assert_eq!(table.title(), Some("X"));
        assert!(table.render().contains('X'));

        table.set_title("");
        assert_eq!(table.title(), None);
        assert!(!table.render().contains('X'));

        // re-enabling with new text replaces the old one
        table.set_title("Y");
        assert_eq!(table.title(), Some("Y"));
    }

    #[test]
    fn test_set_headings_enables_and_disables() {
        let mut table = TableState::new();
        table.set_headings(row(&["a", "b"]));
        assert_eq!(table.headings(), Some(&row(&["a", "b"])[..]));

        table.set_headings(Vec::new());
        assert_eq!(table.headings(), None);
        assert_eq!(table.render(), "");
    }

    #[test]
    fn test_insert_follows_list_semantics() {
        let mut table = TableState::new();
        assert_eq!(table.insert_row(None, row(&["a"])), 0);
        assert_eq!(table.insert_row(Some(0), row(&["b"])), 0);
        assert_eq!(table.insert_row(Some(1), row(&["c"])), 1);
        assert_eq!(table.insert_row(Some(3), row(&["d"])), 3);
        assert_eq!(firsts(&table), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut table = TableState::new();
        table.insert_row(None, row(&["a"]));
        assert_eq!(table.insert_row(Some(99), row(&["b"])), 1);
        assert_eq!(firsts(&table), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_negative_goes_first() {
        let mut table = TableState::new();
        table.insert_row(None, row(&["a"]));
        assert_eq!(table.insert_row(Some(-3), row(&["b"])), 0);
        assert_eq!(firsts(&table), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_defaults_to_last() {
        let mut table = TableState::new();
        table.insert_row(None, row(&["a"]));
        table.insert_row(None, row(&["b"]));
        assert_eq!(table.remove_row(None), Some(row(&["b"])));
        assert_eq!(firsts(&table), vec!["a"]);
    }

    #[test]
    fn test_remove_past_end_removes_last() {
        let mut table = TableState::new();
        for cell in ["a", "b", "c"] {
            table.insert_row(None, row(&[cell]));
        }
        assert_eq!(table.remove_row(Some(3)), Some(row(&["c"])));
        assert_eq!(table.remove_row(Some(100)), Some(row(&["b"])));
        assert_eq!(firsts(&table), vec!["a"]);
    }

    #[test]
    fn test_remove_negative_removes_first() {
        let mut table = TableState::new();
        table.insert_row(None, row(&["a"]));
        table.insert_row(None, row(&["b"]));
        assert_eq!(table.remove_row(Some(-1)), Some(row(&["a"])));
    }

    #[test]
    fn test_remove_on_empty_is_noop() {
        let mut table = TableState::new();
        assert_eq!(table.remove_row(None), None);
        assert_eq!(table.remove_row(Some(0)), None);
        assert_eq!(table.remove_row(Some(5)), None);
    }

    #[test]
    fn test_clear_keeps_title_headings_style() {
        let mut table = TableState::new();
        table.set_title("T");
        table.set_headings(row(&["h"]));
        table.set_border(BorderStyle::Unicode);
        table.insert_row(None, row(&["a"]));

        table.clear();

        assert!(table.rows().is_empty());
        assert_eq!(table.title(), Some("T"));
        assert_eq!(table.headings(), Some(&row(&["h"])[..]));
        assert_eq!(table.style().border, BorderStyle::Unicode);
    }

    #[test]
    fn test_with_style() {
        let table = TableState::with_style(TableStyle {
            border: BorderStyle::Markdown,
            all_separators: true,
        });
        assert_eq!(table.style().border, BorderStyle::Markdown);
        assert!(table.style().all_separators);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1, 5), 0);
        assert_eq!(clamp(3, 5), 3);
        assert_eq!(clamp(9, 5), 5);
        assert_eq!(clamp(i64::MAX, 5), 5);
    }
}
