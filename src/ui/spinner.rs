use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use throbber_widgets_tui::WhichUse::Spin;
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, ThrobberState};

use crate::Theme;
use crate::ui::Component;

/// Animated loading indicator, advanced on every tick.
pub struct Spinner {
    throbber_state: ThrobberState,
    label: Option<&'static str>,
    centered: bool,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            throbber_state: ThrobberState::default(),
            label: None,
            centered: true,
        }
    }

    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Render at the top-left of the given area instead of centering.
    pub const fn inline(mut self) -> Self {
        self.centered = false;
        self
    }

    /// Width in cells the spinner occupies, including its label.
    pub fn width(&self) -> u16 {
        // The throbber glyph is one cell, plus a space before the label.
        self.label
            .map_or(1, |label| 1 + u16::try_from(label.len()).unwrap_or(u16::MAX - 1) + 1)
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Spinner {
    type Output = ();

    fn handle_tick(&mut self) {
        self.throbber_state.calc_next();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut throbber = Throbber::default()
            .throbber_set(BRAILLE_SIX)
            .use_type(Spin)
            .throbber_style(Style::default().fg(theme.lavender()))
            .style(Style::default().fg(theme.subtext1()));

        if let Some(label) = self.label {
            throbber = throbber.label(label);
        }

        let width = self.width();
        let area = if self.centered {
            area.centered(Constraint::Length(width), Constraint::Length(1))
        } else {
            Rect::new(area.x, area.y, width.min(area.width), area.height.min(1))
        };

        frame.render_stateful_widget(throbber, area, &mut self.throbber_state);
    }
}
