//! Sortable, selectable data table.
//!
//! The widget derives a sorted view and a selection subset from an immutable
//! data sequence and reports selection changes to its host as events.

mod column;
mod data_table;
mod record;
mod selection;
mod sort;
mod value;

pub use column::{CellRenderer, ColumnDef, MISSING_FIELD};
pub use data_table::{DataTable, DataTableEvent, SKELETON_ROWS, TableBody};
pub use record::{Record, RecordId};
pub use selection::{CheckState, Selection};
pub use sort::{SortDirection, SortState, sorted_indices};
pub use value::FieldValue;
