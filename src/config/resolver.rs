use crate::config::actions::{GlobalAction, NavAction, TableAction};
use crate::config::keybindings::KeybindingsConfig;
use crossterm::event::KeyEvent;
use std::sync::Arc;

/// Maps key events to configured actions.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    // Global actions
    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.matches(event),
            GlobalAction::Help => kb.help.matches(event),
            GlobalAction::Theme => kb.theme.matches(event),
            GlobalAction::NextTab => kb.next_tab.matches(event),
            GlobalAction::PrevTab => kb.prev_tab.matches(event),
        }
    }

    pub fn display_global(&self, action: GlobalAction) -> String {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.display(),
            GlobalAction::Help => kb.help.display(),
            GlobalAction::Theme => kb.theme.display(),
            GlobalAction::NextTab => kb.next_tab.display(),
            GlobalAction::PrevTab => kb.prev_tab.display(),
        }
    }

    // Navigation actions
    pub fn matches_nav(&self, event: &KeyEvent, action: NavAction) -> bool {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.matches(event),
            NavAction::Down => kb.down.matches(event),
            NavAction::Left => kb.left.matches(event),
            NavAction::Right => kb.right.matches(event),
            NavAction::PageUp => kb.page_up.matches(event),
            NavAction::PageDown => kb.page_down.matches(event),
            NavAction::Home => kb.home.matches(event),
            NavAction::End => kb.end.matches(event),
            NavAction::NextField => kb.next_field.matches(event),
            NavAction::PrevField => kb.prev_field.matches(event),
        }
    }

    pub fn display_nav(&self, action: NavAction) -> String {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.display(),
            NavAction::Down => kb.down.display(),
            NavAction::Left => kb.left.display(),
            NavAction::Right => kb.right.display(),
            NavAction::PageUp => kb.page_up.display(),
            NavAction::PageDown => kb.page_down.display(),
            NavAction::Home => kb.home.display(),
            NavAction::End => kb.end.display(),
            NavAction::NextField => kb.next_field.display(),
            NavAction::PrevField => kb.prev_field.display(),
        }
    }

    // Table actions
    pub fn matches_table(&self, event: &KeyEvent, action: TableAction) -> bool {
        let kb = &self.keybindings.table;
        match action {
            TableAction::Sort => kb.sort.matches(event),
            TableAction::ToggleRow => kb.toggle_row.matches(event),
            TableAction::ToggleAll => kb.toggle_all.matches(event),
            TableAction::ToggleLoading => kb.toggle_loading.matches(event),
            TableAction::Reload => kb.reload.matches(event),
        }
    }

    pub fn display_table(&self, action: TableAction) -> String {
        let kb = &self.keybindings.table;
        match action {
            TableAction::Sort => kb.sort.display(),
            TableAction::ToggleRow => kb.toggle_row.display(),
            TableAction::ToggleAll => kb.toggle_all.display(),
            TableAction::ToggleLoading => kb.toggle_loading.display(),
            TableAction::Reload => kb.reload.display(),
        }
    }
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(Arc::new(KeybindingsConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_default_table_bindings() {
        let resolver = KeyResolver::default();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(resolver.matches_table(&space, TableAction::ToggleRow));
        assert!(!resolver.matches_table(&space, TableAction::Sort));
        assert_eq!(resolver.display_table(TableAction::Sort), "s/Enter");
    }

    #[test]
    fn test_ctrl_tab_switch_does_not_match_plain_char() {
        let resolver = KeyResolver::default();
        let plain = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(!resolver.matches_global(&plain, GlobalAction::NextTab));
        assert!(resolver.matches_global(&ctrl, GlobalAction::NextTab));
    }
}
