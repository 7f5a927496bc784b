use std::cmp::Ordering;

use super::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// The single active sort key and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortState {
    pub const fn ascending(key: &'static str) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Sort state after the header for `key` is activated.
    ///
    /// A new column starts ascending; the current column alternates between
    /// ascending and descending and never returns to the unsorted order.
    pub fn request(current: Option<&Self>, key: &'static str) -> Self {
        match current {
            Some(state) if state.key == key => Self {
                key,
                direction: state.direction.flipped(),
            },
            _ => Self::ascending(key),
        }
    }

    /// Compare two records on this sort key.
    ///
    /// Records missing the field sort before records that have it.
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let ordering = a.field(self.key).cmp(&b.field(self.key));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Indices into `data` in display order.
///
/// The input is left untouched. The sort is stable, so records with equal keys
/// keep their input order in both directions.
pub fn sorted_indices<R: Record>(data: &[R], sort: Option<&SortState>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    if let Some(sort) = sort {
        indices.sort_by(|&a, &b| sort.compare(&data[a], &data[b]));
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{FieldValue, RecordId};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: i64,
        name: &'static str,
        age: Option<i64>,
    }

    impl Record for Person {
        fn id(&self) -> RecordId {
            RecordId::Int(self.id)
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                "age" => self.age.map(FieldValue::Int),
                _ => None,
            }
        }
    }

    fn person(id: i64, name: &'static str, age: Option<i64>) -> Person {
        Person { id, name, age }
    }

    fn view(data: &[Person], sort: Option<&SortState>) -> Vec<i64> {
        sorted_indices(data, sort)
            .into_iter()
            .map(|i| data[i].id)
            .collect()
    }

    #[test]
    fn test_first_request_is_ascending() {
        let state = SortState::request(None, "name");
        assert_eq!(state, SortState::ascending("name"));
    }

    #[test]
    fn test_same_column_cycles_with_length_two() {
        let first = SortState::request(None, "name");
        let second = SortState::request(Some(&first), "name");
        let third = SortState::request(Some(&second), "name");
        assert_eq!(second.direction, SortDirection::Descending);
        assert_eq!(third, first);
    }

    #[test]
    fn test_other_column_resets_to_ascending() {
        let desc = SortState {
            key: "name",
            direction: SortDirection::Descending,
        };
        assert_eq!(
            SortState::request(Some(&desc), "age"),
            SortState::ascending("age")
        );
    }

    #[test]
    fn test_bob_and_amy() {
        let data = vec![person(1, "Bob", None), person(2, "Amy", None)];
        let asc = SortState::request(None, "name");
        assert_eq!(view(&data, Some(&asc)), vec![2, 1]);
        let desc = SortState::request(Some(&asc), "name");
        assert_eq!(view(&data, Some(&desc)), vec![1, 2]);
    }

    #[test]
    fn test_unsorted_keeps_input_order_and_input_is_untouched() {
        let data = vec![person(3, "C", None), person(1, "A", None), person(2, "B", None)];
        let before = data.clone();
        assert_eq!(view(&data, None), vec![3, 1, 2]);
        let _ = view(&data, Some(&SortState::ascending("name")));
        assert_eq!(data, before);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let data = vec![
            person(1, "Dan", Some(40)),
            person(2, "Amy", Some(25)),
            person(3, "Cat", Some(25)),
            person(4, "Bob", Some(31)),
        ];
        let sort = SortState::ascending("age");
        let once = sorted_indices(&data, Some(&sort));
        let resorted: Vec<Person> = once.iter().map(|&i| data[i].clone()).collect();
        let twice = sorted_indices(&resorted, Some(&sort));
        assert_eq!(twice, (0..data.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_equal_keys_stay_stable_in_both_directions() {
        let data = vec![
            person(1, "x", Some(30)),
            person(2, "y", Some(20)),
            person(3, "z", Some(30)),
        ];
        let asc = SortState::ascending("age");
        assert_eq!(view(&data, Some(&asc)), vec![2, 1, 3]);
        let desc = SortState::request(Some(&asc), "age");
        assert_eq!(view(&data, Some(&desc)), vec![1, 3, 2]);
    }

    #[test]
    fn test_missing_values_sort_first() {
        let data = vec![person(1, "a", Some(5)), person(2, "b", None)];
        assert_eq!(view(&data, Some(&SortState::ascending("age"))), vec![2, 1]);
    }
}
