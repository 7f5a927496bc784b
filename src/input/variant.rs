use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Padding};

use crate::Theme;

/// Border and background treatment. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Outlined,
    Filled,
    Ghost,
}

/// Height and text scale. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Declared kind of the field's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
}

impl Size {
    /// Rows taken by the bordered box, including borders.
    pub const fn box_height(self) -> u16 {
        match self {
            Self::Sm | Self::Md => 3,
            Self::Lg => 5,
        }
    }

    const fn padding(self) -> Padding {
        match self {
            Self::Sm => Padding::ZERO,
            Self::Md => Padding::horizontal(1),
            Self::Lg => Padding::uniform(1),
        }
    }

    pub fn text_style(self) -> Style {
        match self {
            Self::Sm | Self::Md => Style::default(),
            Self::Lg => Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// Visual state the box is drawn in, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    Invalid,
    Focused,
    Idle,
}

impl Variant {
    fn border_color(self, state: BoxState, theme: &Theme) -> Color {
        match (state, self) {
            (BoxState::Invalid, _) => theme.error(),
            (BoxState::Focused, _) => theme.border_focused(),
            (BoxState::Idle, Self::Outlined) => theme.border(),
            (BoxState::Idle, Self::Filled) => theme.surface0(),
            (BoxState::Idle, Self::Ghost) => theme.base(),
        }
    }

    fn background(self, state: BoxState, theme: &Theme) -> Option<Color> {
        match (self, state) {
            (Self::Filled, _) | (Self::Ghost, BoxState::Focused) => Some(theme.surface0()),
            _ => None,
        }
    }

    /// Block framing the text area for this variant and size.
    pub fn block(self, size: Size, state: BoxState, theme: &Theme) -> Block<'static> {
        let mut style = Style::default();
        if let Some(bg) = self.background(state, theme) {
            style = style.bg(bg);
        }
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(self.border_color(state, theme)))
            .padding(size.padding())
            .style(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_border_wins_over_focus_for_every_variant() {
        let theme = Theme::default();
        for variant in [Variant::Outlined, Variant::Filled, Variant::Ghost] {
            assert_eq!(variant.border_color(BoxState::Invalid, &theme), theme.error());
        }
    }

    #[test]
    fn test_ghost_blends_into_background_when_idle() {
        let theme = Theme::default();
        assert_eq!(Variant::Ghost.border_color(BoxState::Idle, &theme), theme.base());
        assert_eq!(Variant::Ghost.background(BoxState::Idle, &theme), None);
        assert_eq!(
            Variant::Ghost.background(BoxState::Focused, &theme),
            Some(theme.surface0())
        );
    }
}
