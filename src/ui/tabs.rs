use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::Theme;

/// Rows taken by the title and tab strip.
pub const TAB_BAR_HEIGHT: u16 = 3;

const TITLE: &str = "Component Canvas";

/// Page title with a row of tabs underneath.
pub struct TabBar {
    titles: Vec<&'static str>,
}

impl TabBar {
    pub const fn new(titles: Vec<&'static str>) -> Self {
        Self { titles }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, selected: usize) {
        let [title_area, tabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(2)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(theme.mauve())
                .add_modifier(Modifier::BOLD),
        )))
        .centered();
        frame.render_widget(title, title_area);

        let tabs = Tabs::new(self.titles.clone())
            .select(selected)
            .style(Style::default().fg(theme.overlay1()))
            .highlight_style(
                Style::default()
                    .fg(theme.lavender())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider(Span::styled("│", Style::default().fg(theme.surface2())))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.surface1())),
            );
        frame.render_widget(tabs, tabs_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_title_and_tabs() {
        let bar = TabBar::new(vec!["InputField", "DataTable"]);
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, TAB_BAR_HEIGHT)).unwrap();
        terminal
            .draw(|frame| bar.render(frame, frame.area(), &theme, 1))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Component Canvas"));
        assert!(text.contains("InputField"));
        assert!(text.contains("DataTable"));
    }
}
