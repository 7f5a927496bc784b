use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::Theme;
use crate::ui::{Component, EventResult, Result, Spinner};

use super::value::{Draft, ValueMode, ValueState};
use super::variant::{BoxState, InputKind, Size, Variant};

const MASK: char = '•';
const CLEAR_LABEL: &str = " ✕ ";
const SHOW_LABEL: &str = " show ";
const HIDE_LABEL: &str = " hide ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The text changed. Controlled fields must commit it with [`InputField::set_value`].
    Changed(String),
    Submitted(String),
}

/// Where keyboard focus sits inside a focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Text,
    Clear,
    PasswordToggle,
}

/// A labeled single-line text field.
pub struct InputField {
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    variant: Variant,
    size: Size,
    kind: InputKind,
    invalid: bool,
    disabled: bool,
    loading: bool,
    clearable: bool,
    show_password_toggle: bool,
    value: ValueState,
    reveal: bool,
    focused: bool,
    focus: FieldFocus,
    spinner: Spinner,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            variant: Variant::default(),
            size: Size::default(),
            kind: InputKind::default(),
            invalid: false,
            disabled: false,
            loading: false,
            clearable: false,
            show_password_toggle: false,
            value: ValueState::self_managed(""),
            reveal: false,
            focused: false,
            focus: FieldFocus::Text,
            spinner: Spinner::new().inline(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub const fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub const fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub const fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub const fn show_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    /// Make the field host-controlled, starting from `value`.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = ValueState::controlled(value);
        self
    }

    /// Keep the value inside the field, seeded from `default`.
    pub fn with_default_value(mut self, default: impl Into<String>) -> Self {
        self.value = ValueState::self_managed(default);
        self
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn value(&self) -> &str {
        self.value.value()
    }

    pub const fn value_mode(&self) -> ValueMode {
        self.value.mode()
    }

    /// Commit a value decided by the host.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value.commit(value);
    }

    pub const fn focus(&self) -> FieldFocus {
        self.focus
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.focus = FieldFocus::Text;
    }

    pub const fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn clear_visible(&self) -> bool {
        self.clearable && !self.value().is_empty() && self.is_interactive()
    }

    pub fn password_toggle_visible(&self) -> bool {
        self.show_password_toggle && self.kind == InputKind::Password && self.is_interactive()
    }

    /// The kind the text is currently shown as.
    pub fn effective_kind(&self) -> InputKind {
        if self.kind == InputKind::Password && !self.reveal {
            InputKind::Password
        } else {
            InputKind::Text
        }
    }

    pub const fn is_revealed(&self) -> bool {
        self.reveal
    }

    /// Empty the field through the normal change path and return focus to the text.
    pub fn clear(&mut self) -> Option<InputEvent> {
        if !self.clear_visible() {
            return None;
        }
        self.focus = FieldFocus::Text;
        let draft = self.value.cleared();
        self.value.apply(draft).map(InputEvent::Changed)
    }

    /// Flip password masking. Returns false when the toggle is not available.
    pub fn toggle_reveal(&mut self) -> bool {
        if !self.password_toggle_visible() {
            return false;
        }
        self.reveal = !self.reveal;
        true
    }

    /// Rows needed to render the field with its label and message.
    pub fn height(&self) -> u16 {
        u16::from(self.label.is_some()) + self.size.box_height() + u16::from(self.message().is_some())
    }

    fn message(&self) -> Option<(&str, bool)> {
        if self.invalid {
            self.error_message.as_deref().map(|m| (m, true))
        } else {
            self.helper_text.as_deref().map(|m| (m, false))
        }
    }

    fn affordances(&self) -> Vec<FieldFocus> {
        let mut targets = Vec::with_capacity(2);
        if self.clear_visible() {
            targets.push(FieldFocus::Clear);
        }
        if self.password_toggle_visible() {
            targets.push(FieldFocus::PasswordToggle);
        }
        targets
    }

    /// Move focus across text and visible affordances. Returns false when
    /// focus should leave the field.
    fn cycle_focus(&mut self, forward: bool) -> bool {
        let mut order = vec![FieldFocus::Text];
        order.extend(self.affordances());
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            current.checked_add(1).filter(|&i| i < order.len())
        } else {
            current.checked_sub(1)
        };
        match next {
            Some(i) => {
                self.focus = order[i];
                true
            }
            None => {
                self.focus = FieldFocus::Text;
                false
            }
        }
    }

    fn edit(&mut self, draft: Draft) -> EventResult<InputEvent> {
        self.value
            .apply(draft)
            .map_or(EventResult::Consumed, |value| InputEvent::Changed(value).into())
    }

    fn handle_affordance_key(&mut self, key: KeyEvent) -> EventResult<InputEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                FieldFocus::Clear => self
                    .clear()
                    .map_or(EventResult::Consumed, EventResult::Event),
                FieldFocus::PasswordToggle => {
                    self.toggle_reveal();
                    self.focus = FieldFocus::Text;
                    EventResult::Consumed
                }
                FieldFocus::Text => EventResult::Ignored,
            },
            KeyCode::Esc => {
                self.focus = FieldFocus::Text;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> EventResult<InputEvent> {
        let v = &self.value;
        let draft = match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                return InputEvent::Submitted(self.value().to_string()).into();
            }
            (KeyCode::Backspace, KeyModifiers::ALT) => v.delete_word_before_cursor(),
            (KeyCode::Backspace, _) => v.delete_char_before_cursor(),
            (KeyCode::Delete, _) => v.delete_char_at_cursor(),
            (KeyCode::Left, _) => v.cursor_left(),
            (KeyCode::Right, _) => v.cursor_right(),
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => v.cursor_start(),
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => v.cursor_end(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => v.cleared(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => v.insert_char(c),
            _ => return EventResult::Ignored,
        };
        self.edit(draft)
    }

    fn display_text(&self) -> String {
        match self.effective_kind() {
            InputKind::Password => MASK.to_string().repeat(self.value.char_count()),
            InputKind::Text => self.value().to_string(),
        }
    }

    fn text_line(&self, theme: &Theme) -> Line<'static> {
        let mut input_style = self.size.text_style().fg(theme.text());
        if !self.is_interactive() {
            input_style = input_style.fg(theme.overlay1());
        }
        let placeholder_style = Style::default().fg(theme.overlay0());
        let cursor_style = Style::default()
            .fg(theme.base())
            .bg(theme.text())
            .add_modifier(Modifier::BOLD);
        let show_cursor = self.focused && self.focus == FieldFocus::Text && self.is_interactive();

        if self.value().is_empty() {
            let placeholder = self.placeholder.clone().unwrap_or_default();
            return if show_cursor {
                Line::from(vec![
                    Span::styled(" ", cursor_style),
                    Span::styled(placeholder, placeholder_style),
                ])
            } else {
                Line::from(Span::styled(placeholder, placeholder_style))
            };
        }

        let text = self.display_text();
        if !show_cursor {
            return Line::from(Span::styled(text, input_style));
        }

        let before: String = text.chars().take(self.value.cursor()).collect();
        let mut rest = text.chars().skip(self.value.cursor());
        let at = rest.next().unwrap_or(' ');
        let after: String = rest.collect();
        Line::from(vec![
            Span::styled(before, input_style),
            Span::styled(at.to_string(), cursor_style),
            Span::styled(after, input_style),
        ])
    }

    fn affordance_span(&self, target: FieldFocus, theme: &Theme) -> Span<'static> {
        let label = match target {
            FieldFocus::Clear => CLEAR_LABEL,
            FieldFocus::PasswordToggle if self.reveal => HIDE_LABEL,
            FieldFocus::PasswordToggle => SHOW_LABEL,
            FieldFocus::Text => "",
        };
        let mut style = Style::default().fg(theme.subtext0());
        if self.focused && self.focus == target {
            style = style
                .fg(theme.base())
                .bg(theme.lavender())
                .add_modifier(Modifier::BOLD);
        }
        Span::styled(label, style)
    }

    fn box_state(&self) -> BoxState {
        if self.invalid {
            BoxState::Invalid
        } else if self.focused && self.is_interactive() {
            BoxState::Focused
        } else {
            BoxState::Idle
        }
    }
}

impl Component for InputField {
    type Output = InputEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if !self.is_interactive() {
            return Ok(EventResult::Ignored);
        }

        match key.code {
            KeyCode::Tab => {
                return Ok(if self.cycle_focus(true) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                });
            }
            KeyCode::BackTab => {
                return Ok(if self.cycle_focus(false) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                });
            }
            _ => {}
        }

        Ok(match self.focus {
            FieldFocus::Text => self.handle_text_key(key),
            FieldFocus::Clear | FieldFocus::PasswordToggle => self.handle_affordance_key(key),
        })
    }

    fn handle_tick(&mut self) {
        if self.loading {
            self.spinner.handle_tick();
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [label_area, box_area, message_area] = Layout::vertical([
            Constraint::Length(u16::from(self.label.is_some())),
            Constraint::Length(self.size.box_height()),
            Constraint::Length(u16::from(self.message().is_some())),
        ])
        .areas(area);

        if let Some(label) = &self.label {
            let style = Style::default()
                .fg(theme.subtext1())
                .add_modifier(Modifier::BOLD);
            frame.render_widget(Paragraph::new(label.clone()).style(style), label_area);
        }

        let block = self.variant.block(self.size, self.box_state(), theme);
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let affordances: Vec<Span> = self
            .affordances()
            .into_iter()
            .map(|target| self.affordance_span(target, theme))
            .collect();
        let affordance_width: u16 = affordances
            .iter()
            .map(|s| u16::try_from(s.width()).unwrap_or(0))
            .sum::<u16>()
            + if self.loading { self.spinner.width() + 1 } else { 0 };

        let [text_area, extra_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(affordance_width)])
                .areas(inner);

        frame.render_widget(Paragraph::new(self.text_line(theme)), text_area);
        if self.loading {
            self.spinner.render(frame, extra_area, theme);
        } else if !affordances.is_empty() {
            frame.render_widget(Paragraph::new(Line::from(affordances)), extra_area);
        }

        if let Some((message, is_error)) = self.message() {
            let style = if is_error {
                Style::default()
                    .fg(theme.error())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.subtext0())
            };
            frame.render_widget(Paragraph::new(message.to_string()).style(style), message_area);
        }

        if self.disabled {
            frame
                .buffer_mut()
                .set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(field: &mut InputField, text: &str) {
        for c in text.chars() {
            field.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn changed(result: EventResult<InputEvent>) -> Option<String> {
        match result {
            EventResult::Event(InputEvent::Changed(value)) => Some(value),
            _ => None,
        }
    }

    fn screen_text(field: &mut InputField) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, field.height())).unwrap();
        terminal
            .draw(|frame| field.render(frame, frame.area(), &Theme::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_self_managed_typing_updates_and_reports() {
        let mut field = InputField::new().with_default_value("ab");
        let result = field.handle_key(key(KeyCode::Char('c'))).unwrap();
        assert_eq!(changed(result).as_deref(), Some("abc"));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_controlled_field_waits_for_host() {
        let mut field = InputField::new().with_value("ab");
        assert_eq!(field.value_mode(), ValueMode::Controlled);
        let result = field.handle_key(key(KeyCode::Char('c'))).unwrap();
        assert_eq!(changed(result).as_deref(), Some("abc"));
        assert_eq!(field.value(), "ab");
        field.set_value("abc");
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_clear_empties_and_refocuses_text() {
        let mut field = InputField::new().with_default_value("abc").clearable(true);
        field.set_focused(true);
        assert_eq!(field.handle_key(key(KeyCode::Tab)).unwrap(), EventResult::Consumed);
        assert_eq!(field.focus(), FieldFocus::Clear);

        let result = field.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(changed(result).as_deref(), Some(""));
        assert_eq!(field.value(), "");
        assert_eq!(field.focus(), FieldFocus::Text);
        assert!(!field.clear_visible());
    }

    #[test]
    fn test_clear_hidden_when_empty_disabled_or_loading() {
        assert!(!InputField::new().clearable(true).clear_visible());
        let disabled = InputField::new()
            .with_default_value("x")
            .clearable(true)
            .disabled(true);
        assert!(!disabled.clear_visible());
        let mut loading = InputField::new()
            .with_default_value("x")
            .clearable(true)
            .loading(true);
        assert!(!loading.clear_visible());
        assert!(loading.clear().is_none());
        assert_eq!(loading.value(), "x");
    }

    #[test]
    fn test_password_toggle_reveals_without_changing_value() {
        let mut field = InputField::new()
            .kind(InputKind::Password)
            .with_default_value("password123")
            .show_password_toggle(true);
        assert_eq!(field.effective_kind(), InputKind::Password);
        assert!(screen_text(&mut field).contains("•••••••••••"));
        assert!(field.toggle_reveal());
        assert_eq!(field.effective_kind(), InputKind::Text);
        assert_eq!(field.value(), "password123");
        assert!(screen_text(&mut field).contains("password123"));
        assert!(screen_text(&mut field).contains("hide"));
    }

    #[test]
    fn test_password_toggle_needs_password_kind() {
        let mut field = InputField::new().show_password_toggle(true);
        assert!(!field.password_toggle_visible());
        assert!(!field.toggle_reveal());
    }

    #[test]
    fn test_tab_walks_affordances_then_leaves() {
        let mut field = InputField::new()
            .kind(InputKind::Password)
            .with_default_value("secret")
            .clearable(true)
            .show_password_toggle(true);
        field.set_focused(true);
        assert!(field.handle_key(key(KeyCode::Tab)).unwrap().is_consumed());
        assert!(field.handle_key(key(KeyCode::Tab)).unwrap().is_consumed());
        assert_eq!(field.focus(), FieldFocus::PasswordToggle);
        assert_eq!(field.handle_key(key(KeyCode::Tab)).unwrap(), EventResult::Ignored);
        assert_eq!(field.focus(), FieldFocus::Text);
    }

    #[test]
    fn test_password_toggle_returns_focus_to_text() {
        let mut field = InputField::new()
            .kind(InputKind::Password)
            .with_default_value("secret")
            .show_password_toggle(true);
        field.set_focused(true);
        field.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(field.focus(), FieldFocus::PasswordToggle);

        field.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(field.is_revealed());
        assert_eq!(field.focus(), FieldFocus::Text);

        let result = field.handle_key(key(KeyCode::Char('!'))).unwrap();
        assert_eq!(changed(result).as_deref(), Some("secret!"));
    }

    #[test]
    fn test_disabled_and_loading_ignore_input() {
        let mut disabled = InputField::new().disabled(true);
        assert_eq!(
            disabled.handle_key(key(KeyCode::Char('a'))).unwrap(),
            EventResult::Ignored
        );
        let mut loading = InputField::new().loading(true);
        type_str(&mut loading, "abc");
        assert_eq!(loading.value(), "");
    }

    #[test]
    fn test_error_message_replaces_helper_text() {
        let mut field = InputField::new()
            .label("Email")
            .with_default_value("invalid-email")
            .helper_text("We never share it.")
            .error_message("Please enter a valid email address.")
            .invalid(true);
        let text = screen_text(&mut field);
        assert!(text.contains("Please enter a valid email address."));
        assert!(!text.contains("We never share it."));
    }

    #[test]
    fn test_helper_text_shown_when_valid() {
        let mut field = InputField::new()
            .label("Username")
            .helper_text("Your unique username.")
            .error_message("unused");
        let text = screen_text(&mut field);
        assert!(text.contains("Your unique username."));
        assert!(!text.contains("unused"));
    }

    #[test]
    fn test_unhandled_keys_bubble_up() {
        let mut field = InputField::new();
        field.set_focused(true);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(field.handle_key(ctrl_n).unwrap(), EventResult::Ignored);
    }

    #[test]
    fn test_height_accounts_for_label_and_message() {
        let field = InputField::new().label("L").size(Size::Lg).helper_text("h");
        assert_eq!(field.height(), 7);
        assert_eq!(InputField::new().height(), 3);
    }
}
