use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// Unique identifier of a record, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A row the data table can show.
///
/// The table never mutates records; it only reorders and selects views over
/// them, so implementors can hand out cheap clones.
pub trait Record: Clone {
    /// Identity used for selection membership.
    fn id(&self) -> RecordId;

    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, key: &str) -> Option<FieldValue>;
}
