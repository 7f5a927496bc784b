use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver};
use crate::ui::Keybinding;

/// Rows taken by the status bar, borders included.
pub const STATUS_BAR_HEIGHT: u16 = 4;

pub struct StatusBar {
    resolver: Arc<KeyResolver>,
}

impl StatusBar {
    pub const fn new(resolver: Arc<KeyResolver>) -> Self {
        Self { resolver }
    }

    pub fn render_with_keybindings(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        local_keybindings: &[Keybinding],
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.surface1()));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(24)])
            .split(inner_area);

        self.render_keybindings(frame, chunks[0], theme, local_keybindings);
        Self::render_theme_info(frame, chunks[1], theme);
    }

    fn render_keybindings(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        local_keybindings: &[Keybinding],
    ) {
        let global_keybindings = self.global_keybindings();

        // Local first, then global
        let hints: Vec<&Keybinding> = local_keybindings
            .iter()
            .filter(|kb| kb.hint)
            .chain(global_keybindings.iter().filter(|kb| kb.hint))
            .collect();

        if hints.is_empty() || area.height == 0 {
            return;
        }

        // Widths come from the content so the separators line up.
        let max_key_w = hints.iter().map(|kb| kb.key.chars().count()).max().unwrap_or(1);
        let max_desc_w = hints
            .iter()
            .map(|kb| kb.description.chars().count())
            .max()
            .unwrap_or(1);
        let col_width = u16::try_from(max_key_w + 3 + max_desc_w + 2).unwrap_or(u16::MAX);
        let num_cols = (area.width / col_width).max(1) as usize;
        let num_rows = area.height as usize;

        let mut columns: Vec<Vec<Line>> = vec![Vec::new(); num_cols];
        for (i, kb) in hints.iter().enumerate() {
            let col_idx = i / num_rows;
            if col_idx >= num_cols {
                break;
            }
            columns[col_idx].push(Line::from(vec![
                Span::styled(
                    format!("{:>width$}", kb.key, width = max_key_w),
                    Style::default().fg(theme.peach()),
                ),
                Span::styled(" │ ", Style::default().fg(theme.surface2())),
                Span::styled(
                    kb.description.clone(),
                    Style::default().fg(theme.subtext0()),
                ),
            ]));
        }

        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(col_width); num_cols])
            .split(area);

        for (col_lines, col_area) in columns.into_iter().zip(col_areas.iter()) {
            frame.render_widget(Paragraph::new(col_lines), *col_area);
        }
    }

    fn render_theme_info(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled(
                "component-canvas",
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
            Line::from(Span::styled(
                theme.name,
                Style::default().fg(theme.overlay1()),
            ))
            .right_aligned(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Global keybindings, also listed in the help overlay.
    pub fn global_keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_global(GlobalAction::Help), "Help"),
            Keybinding::hint(self.resolver.display_global(GlobalAction::NextTab), "Next tab"),
            Keybinding::new(self.resolver.display_global(GlobalAction::PrevTab), "Previous tab"),
            Keybinding::hint(self.resolver.display_global(GlobalAction::Theme), "Theme"),
            Keybinding::hint(self.resolver.display_global(GlobalAction::Quit), "Quit"),
            Keybinding::new("ctrl+z", "Suspend"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_renders_hints_and_theme_name() {
        let bar = StatusBar::new(Arc::new(KeyResolver::default()));
        let theme = Theme::default();
        let local = vec![Keybinding::hint("s", "Sort"), Keybinding::new("x", "Hidden")];
        let mut terminal = Terminal::new(TestBackend::new(100, STATUS_BAR_HEIGHT)).unwrap();
        terminal
            .draw(|frame| bar.render_with_keybindings(frame, frame.area(), &theme, &local))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Sort"));
        assert!(!text.contains("Hidden"));
        assert!(text.contains(theme.name));
    }

    #[test]
    fn test_global_keybindings_follow_resolver() {
        let bar = StatusBar::new(Arc::new(KeyResolver::default()));
        let quit = bar
            .global_keybindings()
            .into_iter()
            .find(|kb| kb.description == "Quit")
            .unwrap();
        assert_eq!(quit.key, KeyResolver::default().display_global(GlobalAction::Quit));
    }
}
