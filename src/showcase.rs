//! Sample pages placing each widget in its variant permutations.

mod input;
mod table;
pub mod users;

pub use input::InputShowcase;
pub use table::TableShowcase;
