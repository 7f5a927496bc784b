use crate::config::key::{Key, KeyBinding};
use crate::config::keybindings::{GlobalKeybindings, NavigationKeybindings, TableKeybindings};
use crossterm::event::KeyCode;

// A focused text field swallows plain characters, so every global key
// also has a ctrl or function key alternative.
impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('q')),
                Key::with_ctrl(KeyCode::Char('q')),
            ]),
            help: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('?')),
                Key::new(KeyCode::F(1)),
            ]),
            theme: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('t')),
                Key::new(KeyCode::F(2)),
            ]),
            next_tab: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char(']')),
                Key::with_ctrl(KeyCode::Char('n')),
            ]),
            prev_tab: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('[')),
                Key::with_ctrl(KeyCode::Char('p')),
            ]),
        }
    }
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            up: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('k')),
                Key::new(KeyCode::Up),
            ]),
            down: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('j')),
                Key::new(KeyCode::Down),
            ]),
            left: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('h')),
                Key::new(KeyCode::Left),
            ]),
            right: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('l')),
                Key::new(KeyCode::Right),
            ]),
            page_up: Key::new(KeyCode::PageUp).into(),
            page_down: Key::new(KeyCode::PageDown).into(),
            home: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('g')),
                Key::new(KeyCode::Home),
            ]),
            end: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('G')),
                Key::new(KeyCode::End),
            ]),
            next_field: Key::new(KeyCode::Tab).into(),
            prev_field: Key::new(KeyCode::BackTab).into(),
        }
    }
}

impl Default for TableKeybindings {
    fn default() -> Self {
        Self {
            sort: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('s')),
                Key::new(KeyCode::Enter),
            ]),
            toggle_row: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char(' ')),
                Key::new(KeyCode::Char('x')),
            ]),
            toggle_all: Key::new(KeyCode::Char('a')).into(),
            toggle_loading: Key::new(KeyCode::Char('L')).into(),
            reload: Key::new(KeyCode::Char('r')).into(),
        }
    }
}
