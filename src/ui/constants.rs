use ratatui::layout::Constraint;

pub(crate) const HELP_TEXT: &str =
    "Up/Down select | Home/End jump | Tab next | Esc clear | (v)iew | (q)uit";

pub(crate) const HEADER_HEIGHT: u16 = 3;
pub(crate) const FOOTER_HEIGHT: u16 = 1;

pub(crate) const BODY_COLUMN_PERCENTAGES: [u16; 2] = [66, 34];

/// Fixed column widths for the mountpoint table, in display order.
pub(crate) const TABLE_COLUMN_WIDTHS: [u16; 8] = [18, 12, 5, 9, 16, 18, 20, 12];

pub(crate) fn body_columns() -> [Constraint; 2] {
    BODY_COLUMN_PERCENTAGES.map(Constraint::Percentage)
}

pub(crate) fn table_columns() -> [Constraint; 8] {
    TABLE_COLUMN_WIDTHS.map(Constraint::Length)
}
