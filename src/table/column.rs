use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::widgets::Cell;

use crate::Theme;

use super::Record;

/// Custom cell renderer: a pure function from a record to its cell.
pub type CellRenderer<R> = Box<dyn Fn(&R, &Theme) -> Cell<'static>>;

/// Placeholder shown for fields the record does not have.
pub const MISSING_FIELD: &str = "—";

/// Declares which record field a column shows and how.
pub struct ColumnDef<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub constraint: Constraint,
    cell: Option<CellRenderer<R>>,
}

impl<R: Record> ColumnDef<R> {
    pub const fn new(key: &'static str, header: &'static str, constraint: Constraint) -> Self {
        Self {
            key,
            header,
            constraint,
            cell: None,
        }
    }

    pub fn with_cell(mut self, render: impl Fn(&R, &Theme) -> Cell<'static> + 'static) -> Self {
        self.cell = Some(Box::new(render));
        self
    }

    /// Render the cell for `row`, falling back to the field's display value.
    pub fn render_cell(&self, row: &R, theme: &Theme) -> Cell<'static> {
        if let Some(render) = &self.cell {
            return render(row, theme);
        }
        match row.field(self.key) {
            Some(value) => Cell::from(value.to_string()),
            None => Cell::from(MISSING_FIELD).style(Style::default().fg(theme.overlay0())),
        }
    }
}
