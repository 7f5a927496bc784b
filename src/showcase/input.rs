use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::debug;

use crate::Theme;
use crate::config::{KeyResolver, NavAction};
use crate::input::{InputEvent, InputField, InputKind, Size, ValueMode, Variant};
use crate::ui::{Component, EventResult, Keybinding, Result, Screen};

/// Length cap the page applies to the host-controlled field.
const NICKNAME_MAX_CHARS: usize = 24;

struct Card {
    title: Option<&'static str>,
    description: Option<&'static str>,
    field: InputField,
    /// Echo the field's value beneath it.
    preview: bool,
}

impl Card {
    fn new(field: InputField) -> Self {
        Self {
            title: None,
            description: None,
            field,
            preview: false,
        }
    }

    const fn titled(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    const fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    const fn with_preview(mut self) -> Self {
        self.preview = true;
        self
    }

    fn height(&self) -> u16 {
        2 + u16::from(self.description.is_some())
            + self.field.height()
            + u16::from(self.preview)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.field.is_focused() {
            theme.border_focused()
        } else {
            theme.surface1()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border));
        if let Some(title) = self.title {
            block = block.title(format!(" {title} ")).title_style(
                Style::default().fg(theme.text()).add_modifier(Modifier::BOLD),
            );
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [description_area, field_area, preview_area] = Layout::vertical([
            Constraint::Length(u16::from(self.description.is_some())),
            Constraint::Length(self.field.height()),
            Constraint::Length(u16::from(self.preview)),
        ])
        .areas(inner);

        if let Some(description) = self.description {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    description,
                    Style::default().fg(theme.subtext0()),
                )),
                description_area,
            );
        }
        self.field.render(frame, field_area, theme);
        if self.preview {
            let line = Line::from(vec![
                Span::styled("Preview: ", Style::default().fg(theme.overlay1())),
                Span::styled(
                    self.field.value().to_string(),
                    Style::default().fg(theme.teal()),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), preview_area);
        }
    }
}

struct Section {
    title: &'static str,
    cards: Vec<Card>,
}

impl Section {
    const fn new(title: &'static str, cards: Vec<Card>) -> Self {
        Self { title, cards }
    }

    /// Title row, tallest card and a blank gap row.
    fn height(&self) -> u16 {
        self.cards.iter().map(Card::height).max().unwrap_or(0) + 2
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [title_area, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.title,
                Style::default().fg(theme.mauve()).add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        let columns = Layout::horizontal(vec![Constraint::Fill(1); self.cards.len()])
            .spacing(1)
            .split(cards_area);
        for (card, column) in self.cards.iter_mut().zip(columns.iter()) {
            let height = card.height().min(column.height);
            card.render(frame, Rect { height, ..*column }, theme);
        }
    }
}

/// InputField tab: every variant, size and state of the input field.
pub struct InputShowcase {
    sections: Vec<Section>,
    /// (section, card) of the focused field.
    focus: (usize, usize),
    first_visible: usize,
    resolver: Arc<KeyResolver>,
}

fn sections() -> Vec<Section> {
    vec![
        Section::new(
            "Variants",
            vec![
                Card::new(
                    InputField::new()
                        .label("Name")
                        .placeholder("John Doe")
                        .variant(Variant::Outlined),
                )
                .titled("Outlined")
                .described("The default style"),
                Card::new(
                    InputField::new()
                        .label("Email")
                        .placeholder("you@example.com")
                        .variant(Variant::Filled),
                )
                .titled("Filled")
                .described("With a background color"),
                Card::new(
                    InputField::new()
                        .label("Search")
                        .placeholder("Search...")
                        .variant(Variant::Ghost),
                )
                .titled("Ghost")
                .described("Minimalist, no border"),
            ],
        ),
        Section::new(
            "Sizes",
            vec![
                Card::new(
                    InputField::new()
                        .label("Small")
                        .placeholder("Small size")
                        .size(Size::Sm),
                ),
                Card::new(
                    InputField::new()
                        .label("Medium")
                        .placeholder("Medium size (default)")
                        .size(Size::Md),
                ),
                Card::new(
                    InputField::new()
                        .label("Large")
                        .placeholder("Large size")
                        .size(Size::Lg),
                ),
            ],
        ),
        Section::new(
            "States",
            vec![
                Card::new(
                    InputField::new()
                        .label("Email")
                        .with_default_value("invalid-email")
                        .invalid(true)
                        .error_message("Please enter a valid email address."),
                )
                .titled("Invalid"),
                Card::new(
                    InputField::new()
                        .label("Name")
                        .placeholder("Can't edit this")
                        .disabled(true),
                )
                .titled("Disabled"),
                Card::new(InputField::new().label("Verifying...").loading(true)).titled("Loading"),
                Card::new(
                    InputField::new()
                        .label("Username")
                        .placeholder("your_username")
                        .helper_text("Your unique username for the platform."),
                )
                .titled("With Helper Text"),
            ],
        ),
        Section::new(
            "Extra Features",
            vec![
                Card::new(
                    InputField::new()
                        .label("Search")
                        .with_default_value("Some text here")
                        .clearable(true),
                ),
                Card::new(
                    InputField::new()
                        .label("Password")
                        .kind(InputKind::Password)
                        .with_default_value("password123")
                        .show_password_toggle(true),
                ),
            ],
        ),
        Section::new(
            "Controlled",
            vec![
                Card::new(
                    InputField::new()
                        .label("Nickname")
                        .placeholder("Type something")
                        .with_value("")
                        .clearable(true)
                        .helper_text("The page commits every change, up to 24 characters."),
                )
                .titled("Host-managed")
                .described("Value owned by the page")
                .with_preview(),
            ],
        ),
    ]
}

impl InputShowcase {
    pub fn new(resolver: Arc<KeyResolver>) -> Self {
        let mut showcase = Self {
            sections: sections(),
            focus: (0, 0),
            first_visible: 0,
            resolver,
        };
        showcase.focused_field_mut().set_focused(true);
        showcase
    }

    fn positions(&self) -> Vec<(usize, usize)> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.cards.len()).map(move |c| (s, c)))
            .collect()
    }

    fn field(&self, (section, card): (usize, usize)) -> &InputField {
        &self.sections[section].cards[card].field
    }

    fn focused_field_mut(&mut self) -> &mut InputField {
        let (section, card) = self.focus;
        &mut self.sections[section].cards[card].field
    }

    pub fn focused_label(&self) -> Option<&str> {
        self.field(self.focus).label_text()
    }

    /// Move focus to the next interactive field, wrapping around.
    /// Disabled and loading fields are skipped.
    fn move_focus(&mut self, forward: bool) {
        let positions = self.positions();
        let Some(current) = positions.iter().position(|p| *p == self.focus) else {
            return;
        };
        let len = positions.len();
        let next = (1..=len)
            .map(|step| {
                if forward {
                    (current + step) % len
                } else {
                    (current + len - step) % len
                }
            })
            .map(|i| positions[i])
            .find(|p| self.field(*p).is_interactive());
        if let Some(next) = next {
            self.focused_field_mut().set_focused(false);
            self.focus = next;
            self.focused_field_mut().set_focused(true);
        }
    }

    fn handle_field_event(&mut self, event: InputEvent) {
        let field = self.focused_field_mut();
        match event {
            InputEvent::Changed(value) => match field.value_mode() {
                ValueMode::Controlled => {
                    let capped: String = value.chars().take(NICKNAME_MAX_CHARS).collect();
                    field.set_value(capped);
                }
                ValueMode::SelfManaged => debug!(%value, "Input changed"),
            },
            InputEvent::Submitted(value) => debug!(%value, "Input submitted"),
        }
    }

    /// Keep the focused section on screen.
    fn scroll_to_focus(&mut self, height: u16) {
        let focused = self.focus.0;
        if focused < self.first_visible {
            self.first_visible = focused;
        }
        while self.first_visible < focused
            && self.sections[self.first_visible..=focused]
                .iter()
                .map(Section::height)
                .sum::<u16>()
                > height
        {
            self.first_visible += 1;
        }
    }
}

impl Screen for InputShowcase {
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<()>> {
        match self.focused_field_mut().handle_key(key)? {
            EventResult::Event(event) => {
                self.handle_field_event(event);
                return Ok(EventResult::Consumed);
            }
            EventResult::Consumed => return Ok(EventResult::Consumed),
            EventResult::Ignored => {}
        }

        if self.resolver.matches_nav(&key, NavAction::NextField)
            || self.resolver.matches_nav(&key, NavAction::Down)
        {
            self.move_focus(true);
        } else if self.resolver.matches_nav(&key, NavAction::PrevField)
            || self.resolver.matches_nav(&key, NavAction::Up)
        {
            self.move_focus(false);
        } else {
            return Ok(EventResult::Ignored);
        }
        Ok(EventResult::Consumed)
    }

    fn handle_tick(&mut self) {
        for card in self.sections.iter_mut().flat_map(|s| s.cards.iter_mut()) {
            card.field.handle_tick();
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.scroll_to_focus(area.height);

        let mut y = area.y;
        for section in &mut self.sections[self.first_visible..] {
            let remaining = area.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let height = section.height().min(remaining);
            section.render(frame, Rect::new(area.x, y, area.width, height), theme);
            y += height;
        }
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_nav(NavAction::NextField), "Next"),
            Keybinding::hint(self.resolver.display_nav(NavAction::PrevField), "Previous"),
            Keybinding::hint("enter/space", "Activate"),
            Keybinding::new("alt+backspace", "Delete word"),
            Keybinding::new("ctrl+u", "Clear line"),
            Keybinding::new("ctrl+a/ctrl+e", "Line start/end"),
        ]
    }
}
