/// Who owns the text of an input field. Fixed when the field is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// The host supplies the value and commits every change itself.
    Controlled,
    /// The field keeps its own value and reports changes for observation.
    SelfManaged,
}

/// A candidate value and cursor produced by an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub value: String,
    pub cursor: usize,
}

/// Text value and cursor of an input field.
///
/// The cursor is a character index, so multi-byte input edits cleanly.
#[derive(Debug, Clone)]
pub struct ValueState {
    mode: ValueMode,
    value: String,
    cursor: usize,
    pending_cursor: Option<usize>,
}

impl ValueState {
    pub fn controlled(value: impl Into<String>) -> Self {
        Self::with_mode(ValueMode::Controlled, value.into())
    }

    pub fn self_managed(default: impl Into<String>) -> Self {
        Self::with_mode(ValueMode::SelfManaged, default.into())
    }

    fn with_mode(mode: ValueMode, value: String) -> Self {
        let cursor = value.chars().count();
        Self {
            mode,
            value,
            cursor,
            pending_cursor: None,
        }
    }

    pub const fn mode(&self) -> ValueMode {
        self.mode
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Apply an edit according to the value mode.
    ///
    /// Returns the new text if it differs from the current one. Controlled
    /// values stay untouched until the host calls [`ValueState::commit`].
    pub fn apply(&mut self, draft: Draft) -> Option<String> {
        if draft.value == self.value {
            self.cursor = draft.cursor;
            return None;
        }
        let changed = draft.value.clone();
        match self.mode {
            ValueMode::SelfManaged => {
                self.value = draft.value;
                self.cursor = draft.cursor;
            }
            ValueMode::Controlled => self.pending_cursor = Some(draft.cursor),
        }
        Some(changed)
    }

    /// Accept a value from the host.
    pub fn commit(&mut self, value: impl Into<String>) {
        self.value = value.into();
        let len = self.char_count();
        self.cursor = self
            .pending_cursor
            .take()
            .filter(|&cursor| cursor <= len)
            .unwrap_or(len);
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn draft(&self, value: String, cursor: usize) -> Draft {
        Draft { value, cursor }
    }

    pub fn insert_char(&self, c: char) -> Draft {
        let mut value = self.value.clone();
        value.insert(self.byte_index(self.cursor), c);
        self.draft(value, self.cursor + 1)
    }

    pub fn delete_char_before_cursor(&self) -> Draft {
        if self.cursor == 0 {
            return self.draft(self.value.clone(), 0);
        }
        let mut value = self.value.clone();
        value.remove(self.byte_index(self.cursor - 1));
        self.draft(value, self.cursor - 1)
    }

    pub fn delete_char_at_cursor(&self) -> Draft {
        let mut value = self.value.clone();
        if self.cursor < self.char_count() {
            value.remove(self.byte_index(self.cursor));
        }
        self.draft(value, self.cursor)
    }

    pub fn delete_word_before_cursor(&self) -> Draft {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1] == ' ' {
            pos -= 1;
        }
        while pos > 0 && chars[pos - 1] != ' ' {
            pos -= 1;
        }
        let value: String = chars[..pos].iter().chain(&chars[self.cursor..]).collect();
        self.draft(value, pos)
    }

    pub fn cleared(&self) -> Draft {
        self.draft(String::new(), 0)
    }

    pub fn cursor_left(&self) -> Draft {
        self.draft(self.value.clone(), self.cursor.saturating_sub(1))
    }

    pub fn cursor_right(&self) -> Draft {
        self.draft(self.value.clone(), (self.cursor + 1).min(self.char_count()))
    }

    pub fn cursor_start(&self) -> Draft {
        self.draft(self.value.clone(), 0)
    }

    pub fn cursor_end(&self) -> Draft {
        self.draft(self.value.clone(), self.char_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_managed_applies_edits() {
        let mut state = ValueState::self_managed("ab");
        let changed = state.apply(state.insert_char('c'));
        assert_eq!(changed.as_deref(), Some("abc"));
        assert_eq!(state.value(), "abc");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_controlled_waits_for_commit() {
        let mut state = ValueState::controlled("ab");
        let changed = state.apply(state.insert_char('c'));
        assert_eq!(changed.as_deref(), Some("abc"));
        assert_eq!(state.value(), "ab");

        state.commit("abc");
        assert_eq!(state.value(), "abc");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_controlled_host_may_rewrite_value() {
        let mut state = ValueState::controlled("");
        let _ = state.apply(state.insert_char('x'));
        state.commit("X");
        assert_eq!(state.value(), "X");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_cursor_moves_are_not_changes() {
        let mut state = ValueState::self_managed("abc");
        assert_eq!(state.apply(state.cursor_start()), None);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.apply(state.cursor_left()), None);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.apply(state.cursor_end()), None);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = ValueState::self_managed("héllo");
        let _ = state.apply(state.cursor_start());
        let _ = state.apply(state.cursor_right());
        let _ = state.apply(state.delete_char_at_cursor());
        assert_eq!(state.value(), "hllo");
        let _ = state.apply(state.insert_char('ë'));
        assert_eq!(state.value(), "hëllo");
        let _ = state.apply(state.delete_char_before_cursor());
        assert_eq!(state.value(), "hllo");
    }

    #[test]
    fn test_delete_word() {
        let mut state = ValueState::self_managed("some text here  ");
        let _ = state.apply(state.delete_word_before_cursor());
        assert_eq!(state.value(), "some text ");
        assert_eq!(state.cursor(), 10);
    }
}
