//! Labeled text input field with style and size variants.

mod field;
mod value;
mod variant;

pub use field::{FieldFocus, InputEvent, InputField};
pub use value::{ValueMode, ValueState};
pub use variant::{InputKind, Size, Variant};
