use std::collections::HashSet;

use super::{Record, RecordId};

/// Visual state of the "select all" checkbox.
///
/// Always derived from the selection and the data length, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl CheckState {
    /// Derive the header checkbox state from selection and data sizes.
    pub const fn derive(selected: usize, total: usize) -> Self {
        if total > 0 && selected == total {
            Self::Checked
        } else if selected > 0 && selected < total {
            Self::Indeterminate
        } else {
            Self::Unchecked
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Checked => "[x]",
            Self::Unchecked => "[ ]",
            Self::Indeterminate => "[-]",
        }
    }
}

/// Selected records, compared by identifier and kept in insertion order.
#[derive(Debug, Clone)]
pub struct Selection<R> {
    rows: Vec<R>,
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> Selection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.rows.iter().any(|row| &row.id() == id)
    }

    /// Remove the row if it is selected, otherwise append it.
    pub fn toggle(&mut self, row: &R) {
        let id = row.id();
        if let Some(pos) = self.rows.iter().position(|r| r.id() == id) {
            self.rows.remove(pos);
        } else {
            self.rows.push(row.clone());
        }
    }

    /// Replace the selection with all of `data`, or clear it.
    pub fn set_all(&mut self, checked: bool, data: &[R]) {
        self.rows = if checked { data.to_vec() } else { Vec::new() };
    }

    /// Drop selected rows whose identifiers are no longer in `data`.
    ///
    /// Returns true if anything was removed.
    pub fn retain_present(&mut self, data: &[R]) -> bool {
        let present: HashSet<RecordId> = data.iter().map(Record::id).collect();
        let before = self.rows.len();
        self.rows.retain(|row| present.contains(&row.id()));
        self.rows.len() != before
    }

    pub fn check_state(&self, total: usize) -> CheckState {
        CheckState::derive(self.rows.len(), total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(i64);

    impl Record for Item {
        fn id(&self) -> RecordId {
            RecordId::Int(self.0)
        }

        fn field(&self, _key: &str) -> Option<FieldValue> {
            None
        }
    }

    fn items(n: i64) -> Vec<Item> {
        (1..=n).map(Item).collect()
    }

    #[test]
    fn test_derive_check_state() {
        assert_eq!(CheckState::derive(0, 0), CheckState::Unchecked);
        assert_eq!(CheckState::derive(0, 3), CheckState::Unchecked);
        assert_eq!(CheckState::derive(1, 3), CheckState::Indeterminate);
        assert_eq!(CheckState::derive(3, 3), CheckState::Checked);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        selection.toggle(&Item(2));
        selection.toggle(&Item(1));
        assert_eq!(selection.rows(), &[Item(2), Item(1)]);
        selection.toggle(&Item(2));
        assert_eq!(selection.rows(), &[Item(1)]);
    }

    #[test]
    fn test_select_all_then_deselect_one() {
        let data = items(5);
        let mut selection = Selection::new();
        selection.set_all(true, &data);
        selection.toggle(&data[2]);
        assert_eq!(selection.len(), 4);
        assert_eq!(selection.check_state(data.len()), CheckState::Indeterminate);
    }

    #[test]
    fn test_select_all_on_empty_data() {
        let mut selection: Selection<Item> = Selection::new();
        selection.set_all(true, &[]);
        assert!(selection.is_empty());
        assert_eq!(selection.check_state(0), CheckState::Unchecked);
    }

    #[test]
    fn test_check_then_uncheck_all_clears_prior_picks() {
        let data = items(4);
        let mut selection = Selection::new();
        selection.toggle(&data[0]);
        selection.toggle(&data[3]);
        selection.set_all(true, &data);
        selection.set_all(false, &data);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_retain_present_prunes_stale_rows() {
        let mut selection = Selection::new();
        selection.set_all(true, &items(3));
        assert!(selection.retain_present(&[Item(2), Item(9)]));
        assert_eq!(selection.rows(), &[Item(2)]);
        assert!(!selection.retain_present(&[Item(2)]));
    }
}
