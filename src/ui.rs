mod help;
mod spinner;
mod status_bar;
mod tabs;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

pub use color_eyre::Result;

use crate::Theme;

pub use help::{HelpEvent, HelpOverlay, Keybinding, KeybindingSection};
pub use spinner::Spinner;
pub use status_bar::{STATUS_BAR_HEIGHT, StatusBar};
pub use tabs::{TAB_BAR_HEIGHT, TabBar};

/// Result of handling an input event.
///
/// - `Ignored` - The handler didn't recognize or handle this input
/// - `Consumed` - The input was handled but produced no event
/// - `Event(E)` - The input was handled and produced an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> EventResult<E> {
    /// Returns true if the input was consumed (either with or without an event).
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Map the event payload, keeping `Ignored`/`Consumed` as they are.
    pub fn map<F, U>(self, f: F) -> EventResult<U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ignored => EventResult::Ignored,
            Self::Consumed => EventResult::Consumed,
            Self::Event(event) => EventResult::Event(f(event)),
        }
    }
}

impl<E> From<E> for EventResult<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Interactive UI building block.
///
/// Components handle key events and emit generic outputs to their host. They
/// know nothing about the page they are placed on.
///
/// # Examples
///
/// - `DataTable` - sortable table with optional row selection
/// - `InputField` - single-line labeled text field
pub trait Component {
    /// The output type produced by this component.
    type Output;

    /// Handle a key event.
    ///
    /// Returns `Ok(EventResult::...)` where:
    /// - `Ignored` - key was not handled, parent should process it
    /// - `Consumed` - key was handled but produced no output
    /// - `Event(output)` - key was handled and produced an output
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        _ = key;
        Ok(EventResult::Ignored)
    }

    /// Called on each tick for animations and time-based updates.
    fn handle_tick(&mut self) {}

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// Full-page view that orchestrates components.
///
/// Screens own the sample data and wire component events to whatever the
/// page shows next to the widget.
pub trait Screen {
    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<()>>;

    /// Render the screen to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Called on each tick for animations and time-based updates.
    fn handle_tick(&mut self) {}

    /// Returns the keybindings for this screen.
    fn keybindings(&self) -> Vec<Keybinding> {
        vec![]
    }
}
