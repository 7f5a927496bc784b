use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tracing::{debug, error, info};

use crate::Theme;
use crate::config::{KeyResolver, NavAction, TableAction};
use crate::table::{DataTable, DataTableEvent};
use crate::ui::{Component, EventResult, Keybinding, Result, Screen, Spinner};

use super::users::{User, load_users, sample_users, user_columns};

const NO_SELECTION: &str = "No rows selected.";

/// DataTable tab: the user table, a loading switch and the current selection.
pub struct TableShowcase {
    table: DataTable<User>,
    selected: Vec<User>,
    /// JSON file the users came from; built-in samples when absent.
    source: Option<PathBuf>,
    spinner: Spinner,
    resolver: Arc<KeyResolver>,
}

impl TableShowcase {
    pub fn new(users: Vec<User>, source: Option<PathBuf>, resolver: Arc<KeyResolver>) -> Self {
        Self {
            table: DataTable::new(users, user_columns(), resolver.clone())
                .selectable()
                .with_title(" Users "),
            selected: Vec::new(),
            source,
            spinner: Spinner::new().with_label("Loading users").inline(),
            resolver,
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.table.is_loading()
    }

    pub fn selected(&self) -> &[User] {
        &self.selected
    }

    fn toggle_loading(&mut self) {
        let loading = !self.table.is_loading();
        debug!(loading, "Toggled table loading state");
        self.table.set_loading(loading);
    }

    /// Replace the table data, keeping the selection panel in step with pruning.
    fn replace_users(&mut self, users: Vec<User>) {
        info!(count = users.len(), "Replacing table data");
        if let Some(DataTableEvent::SelectionChanged(rows)) = self.table.set_data(users) {
            self.selected = rows;
        }
    }

    fn reload(&mut self) {
        let users = match &self.source {
            Some(path) => match load_users(path) {
                Ok(users) => users,
                Err(e) => {
                    error!("Failed to reload users: {e:#}");
                    return;
                }
            },
            None => sample_users(),
        };
        self.replace_users(users);
    }

    fn selection_text(&self) -> String {
        if self.selected.is_empty() {
            return NO_SELECTION.to_string();
        }
        let names: Vec<&str> = self.selected.iter().map(|u| u.name.as_str()).collect();
        serde_json::to_string_pretty(&names).unwrap_or_else(|_| names.join("\n"))
    }

    fn render_switch(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let (glyph, style) = if self.table.is_loading() {
            ("[on ]", Style::default().fg(theme.success()).add_modifier(Modifier::BOLD))
        } else {
            ("[off]", Style::default().fg(theme.overlay1()))
        };
        let line = Line::from(vec![
            Span::styled(glyph, style),
            Span::raw(" "),
            Span::styled("Toggle Loading State", Style::default().fg(theme.text())),
            Span::styled(
                format!(" ({})", self.resolver.display_table(TableAction::ToggleLoading)),
                Style::default().fg(theme.overlay0()),
            ),
        ]);
        let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
        frame.render_widget(Paragraph::new(line), area);

        if self.table.is_loading() {
            let spinner_area = Rect {
                x: area.x.saturating_add(width + 2),
                width: area.width.saturating_sub(width + 2),
                height: 1,
                ..area
            };
            self.spinner.render(frame, spinner_area, theme);
        }
    }

    fn render_selection(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border()))
            .title(" Selected Rows ")
            .title_style(Style::default().fg(theme.mauve()).add_modifier(Modifier::BOLD));
        let style = if self.selected.is_empty() {
            Style::default().fg(theme.subtext0())
        } else {
            Style::default().fg(theme.text())
        };
        let paragraph = Paragraph::new(self.selection_text())
            .style(style)
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Screen for TableShowcase {
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<()>> {
        if self.resolver.matches_table(&key, TableAction::ToggleLoading) {
            self.toggle_loading();
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_table(&key, TableAction::Reload) {
            self.reload();
            return Ok(EventResult::Consumed);
        }

        match self.table.handle_key(key)? {
            EventResult::Event(DataTableEvent::SelectionChanged(rows)) => {
                debug!(count = rows.len(), "Selection changed");
                self.selected = rows;
                Ok(EventResult::Consumed)
            }
            EventResult::Event(DataTableEvent::SortChanged(sort)) => {
                debug!(key = sort.key, direction = ?sort.direction, "Sort changed");
                Ok(EventResult::Consumed)
            }
            EventResult::Consumed => Ok(EventResult::Consumed),
            EventResult::Ignored => Ok(EventResult::Ignored),
        }
    }

    fn handle_tick(&mut self) {
        if self.table.is_loading() {
            self.spinner.handle_tick();
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let selection_height = u16::try_from(self.selected.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(12);
        let [switch_area, table_area, selection_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(selection_height),
        ])
        .areas(area);

        self.render_switch(frame, switch_area, theme);
        self.table.render(frame, table_area, theme);
        self.render_selection(frame, selection_area, theme);
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_table(TableAction::Sort), "Sort"),
            Keybinding::hint(self.resolver.display_table(TableAction::ToggleRow), "Select row"),
            Keybinding::hint(self.resolver.display_table(TableAction::ToggleAll), "Select all"),
            Keybinding::hint(
                self.resolver.display_table(TableAction::ToggleLoading),
                "Loading",
            ),
            Keybinding::new(self.resolver.display_table(TableAction::Reload), "Reload data"),
            Keybinding::new(
                format!(
                    "{}/{}",
                    self.resolver.display_nav(NavAction::Up),
                    self.resolver.display_nav(NavAction::Down)
                ),
                "Move row",
            ),
            Keybinding::new(
                format!(
                    "{}/{}",
                    self.resolver.display_nav(NavAction::Left),
                    self.resolver.display_nav(NavAction::Right)
                ),
                "Move column",
            ),
        ]
    }
}
