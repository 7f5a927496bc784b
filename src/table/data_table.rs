use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use tracing::debug;

use crate::Theme;
use crate::config::{KeyResolver, NavAction, TableAction};
use crate::ui::{Component, EventResult, Result};

use super::{CheckState, ColumnDef, Record, Selection, SortState, sorted_indices};

/// Number of placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 5;

const SELECT_COLUMN_WIDTH: u16 = 3;
const PAGE_STEP: usize = 10;

/// Notification sent to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DataTableEvent<R> {
    /// The selection changed; rows are in the order they were selected.
    SelectionChanged(Vec<R>),
    /// A header was activated and the view was re-sorted.
    SortChanged(SortState),
}

/// What the table body shows for the current state.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a, R> {
    /// Placeholder rows; `cells` includes the selection column when present.
    Skeleton { rows: usize, cells: usize },
    /// A single full-width "no results" row spanning `span` columns.
    Empty { span: usize },
    /// Records in display order.
    Rows(Vec<&'a R>),
}

/// A sortable table with optional row selection.
pub struct DataTable<R: Record> {
    data: Vec<R>,
    columns: Vec<ColumnDef<R>>,
    sort: Option<SortState>,
    selection: Selection<R>,
    selectable: bool,
    loading: bool,
    column_cursor: usize,
    state: TableState,
    title: Option<String>,
    resolver: Arc<KeyResolver>,
}

impl<R: Record> DataTable<R> {
    pub fn new(data: Vec<R>, columns: Vec<ColumnDef<R>>, resolver: Arc<KeyResolver>) -> Self {
        let mut state = TableState::default();
        if !data.is_empty() {
            state.select(Some(0));
        }
        Self {
            data,
            columns,
            sort: None,
            selection: Selection::new(),
            selectable: false,
            loading: false,
            column_cursor: 0,
            state,
            title: None,
            resolver,
        }
    }

    /// Add a leading checkbox column and enable row selection.
    pub const fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Show skeleton rows instead of data. Sorting and selection are disabled meanwhile.
    pub const fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub const fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn selected_rows(&self) -> &[R] {
        self.selection.rows()
    }

    pub fn check_state(&self) -> CheckState {
        self.selection.check_state(self.data.len())
    }

    pub fn is_selected(&self, row: &R) -> bool {
        self.selection.contains(&row.id())
    }

    /// Replace the data sequence.
    ///
    /// Selected rows that are no longer present are dropped; the sort key is kept.
    pub fn set_data(&mut self, data: Vec<R>) -> Option<DataTableEvent<R>> {
        self.data = data;
        let cursor = self.state.selected().unwrap_or(0);
        self.state.select(if self.data.is_empty() {
            None
        } else {
            Some(cursor.min(self.data.len() - 1))
        });
        if self.selection.retain_present(&self.data) {
            debug!(remaining = self.selection.len(), "Pruned stale selections");
            return Some(self.selection_changed());
        }
        None
    }

    /// Records in display order.
    pub fn sorted_rows(&self) -> Vec<&R> {
        sorted_indices(&self.data, self.sort.as_ref())
            .into_iter()
            .map(|i| &self.data[i])
            .collect()
    }

    pub fn body(&self) -> TableBody<'_, R> {
        let span = self.columns.len() + usize::from(self.selectable);
        if self.loading {
            TableBody::Skeleton {
                rows: SKELETON_ROWS,
                cells: span,
            }
        } else if self.data.is_empty() {
            TableBody::Empty { span }
        } else {
            TableBody::Rows(self.sorted_rows())
        }
    }

    /// Activate the header of the column with `key`.
    ///
    /// Returns the new sort state, or `None` while loading.
    pub fn request_sort(&mut self, key: &'static str) -> Option<SortState> {
        if self.loading {
            return None;
        }
        let focused = self.focused_row().map(Record::id);
        let next = SortState::request(self.sort.as_ref(), key);
        debug!(key, direction = ?next.direction, "Sorting table");
        self.sort = Some(next.clone());

        // Keep the cursor on the same record after reordering.
        if let Some(id) = focused {
            let position = self.sorted_rows().iter().position(|row| row.id() == id);
            self.state.select(position);
        }
        Some(next)
    }

    /// Toggle selection of a single row.
    pub fn toggle_row(&mut self, row: &R) -> Option<DataTableEvent<R>> {
        if !self.selectable || self.loading {
            return None;
        }
        self.selection.toggle(row);
        Some(self.selection_changed())
    }

    /// Set the header checkbox: checked selects every row, unchecked clears.
    pub fn toggle_all(&mut self, checked: bool) -> Option<DataTableEvent<R>> {
        if !self.selectable || self.loading {
            return None;
        }
        self.selection.set_all(checked, &self.data);
        Some(self.selection_changed())
    }

    /// Click on the header checkbox. Anything but fully checked becomes checked.
    pub fn activate_header_checkbox(&mut self) -> Option<DataTableEvent<R>> {
        let checked = self.check_state() != CheckState::Checked;
        self.toggle_all(checked)
    }

    pub fn focused_row(&self) -> Option<&R> {
        let index = self.state.selected()?;
        self.sorted_rows().get(index).copied()
    }

    fn selection_changed(&self) -> DataTableEvent<R> {
        DataTableEvent::SelectionChanged(self.selection.rows().to_vec())
    }

    fn toggle_focused_row(&mut self) -> Option<DataTableEvent<R>> {
        let row = self.focused_row()?.clone();
        self.toggle_row(&row)
    }

    fn sort_focused_column(&mut self) -> Option<DataTableEvent<R>> {
        let key = self.columns.get(self.column_cursor)?.key;
        self.request_sort(key).map(DataTableEvent::SortChanged)
    }

    const fn move_column(&mut self, forward: bool) {
        if self.columns.is_empty() {
            return;
        }
        if forward {
            if self.column_cursor + 1 < self.columns.len() {
                self.column_cursor += 1;
            }
        } else {
            self.column_cursor = self.column_cursor.saturating_sub(1);
        }
    }

    fn select_index(&mut self, index: usize) {
        if !self.data.is_empty() {
            self.state.select(Some(index.min(self.data.len() - 1)));
        }
    }

    fn handle_navigation_key(&mut self, key: &KeyEvent) -> bool {
        let current = self.state.selected().unwrap_or(0);
        if self.resolver.matches_nav(key, NavAction::Down) {
            self.select_index(current + 1);
        } else if self.resolver.matches_nav(key, NavAction::Up) {
            self.select_index(current.saturating_sub(1));
        } else if self.resolver.matches_nav(key, NavAction::PageDown) {
            self.select_index(current + PAGE_STEP);
        } else if self.resolver.matches_nav(key, NavAction::PageUp) {
            self.select_index(current.saturating_sub(PAGE_STEP));
        } else if self.resolver.matches_nav(key, NavAction::Home) {
            self.select_index(0);
        } else if self.resolver.matches_nav(key, NavAction::End) {
            self.select_index(self.data.len().saturating_sub(1));
        } else if self.resolver.matches_nav(key, NavAction::Left) {
            self.move_column(false);
        } else if self.resolver.matches_nav(key, NavAction::Right) {
            self.move_column(true);
        } else {
            return false;
        }
        true
    }

    fn header_row(&self, theme: &Theme) -> Row<'static> {
        let header_style = Style::default()
            .fg(theme.header())
            .add_modifier(Modifier::BOLD);

        let mut cells = Vec::with_capacity(self.columns.len() + 1);
        if self.selectable {
            cells.push(Cell::from(self.check_state().glyph()).style(header_style));
        }
        for (i, column) in self.columns.iter().enumerate() {
            let mut spans = vec![Span::raw(column.header)];
            if let Some(sort) = self.sort.as_ref().filter(|s| s.key == column.key) {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    sort.direction.arrow(),
                    Style::default().fg(theme.peach()),
                ));
            }
            let mut style = header_style;
            if i == self.column_cursor && !self.loading {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            cells.push(Cell::from(Line::from(spans)).style(style));
        }

        Row::new(cells)
            .height(1)
            .style(Style::default().bg(theme.surface0()))
    }

    fn body_rows(&self, theme: &Theme) -> Vec<Row<'static>> {
        match self.body() {
            TableBody::Skeleton { rows, .. } => {
                let placeholder = Style::default().fg(theme.surface1());
                (0..rows)
                    .map(|_| {
                        let mut cells = Vec::new();
                        if self.selectable {
                            cells.push(Cell::from("░░").style(placeholder));
                        }
                        cells.extend(
                            self.columns
                                .iter()
                                .map(|_| Cell::from("░".repeat(12)).style(placeholder)),
                        );
                        Row::new(cells)
                    })
                    .collect()
            }
            TableBody::Empty { .. } => Vec::new(),
            TableBody::Rows(rows) => rows
                .into_iter()
                .map(|row| {
                    let selected = self.is_selected(row);
                    let mut cells = Vec::with_capacity(self.columns.len() + 1);
                    if self.selectable {
                        let glyph = if selected {
                            CheckState::Checked
                        } else {
                            CheckState::Unchecked
                        };
                        cells.push(Cell::from(glyph.glyph()));
                    }
                    cells.extend(self.columns.iter().map(|c| c.render_cell(row, theme)));

                    let mut style = Style::default().fg(theme.text());
                    if selected {
                        style = style.bg(theme.surface0());
                    }
                    Row::new(cells).style(style)
                })
                .collect(),
        }
    }
}

impl<R: Record> Component for DataTable<R> {
    type Output = DataTableEvent<R>;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if self.loading {
            return Ok(EventResult::Ignored);
        }

        if self.handle_navigation_key(&key) {
            return Ok(EventResult::Consumed);
        }

        let event = if self.resolver.matches_table(&key, TableAction::Sort) {
            self.sort_focused_column()
        } else if self.selectable && self.resolver.matches_table(&key, TableAction::ToggleRow) {
            self.toggle_focused_row()
        } else if self.selectable && self.resolver.matches_table(&key, TableAction::ToggleAll) {
            self.activate_header_checkbox()
        } else {
            return Ok(EventResult::Ignored);
        };

        Ok(event.map_or(EventResult::Consumed, EventResult::Event))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut widths = Vec::with_capacity(self.columns.len() + 1);
        if self.selectable {
            widths.push(Constraint::Length(SELECT_COLUMN_WIDTH));
        }
        widths.extend(self.columns.iter().map(|c| c.constraint));

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border()));
        if let Some(title) = &self.title {
            block = block.title(title.as_str()).title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            );
        }
        let inner = block.inner(area);

        let mut table = Table::new(self.body_rows(theme), widths)
            .header(self.header_row(theme))
            .block(block);
        if !self.loading {
            table = table
                .row_highlight_style(
                    Style::default()
                        .bg(theme.selection_bg())
                        .fg(theme.lavender())
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
        }

        frame.render_stateful_widget(table, area, &mut self.state);

        if matches!(self.body(), TableBody::Empty { .. }) && inner.height > 1 {
            let row_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            let message = Paragraph::new("No results found.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.subtext0()));
            frame.render_widget(message, row_area);
        }
    }
}
