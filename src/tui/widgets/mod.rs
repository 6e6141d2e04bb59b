//! TUI widgets for interactive components.

mod select_list;
mod text_input;

pub use select_list::{SelectAction, SelectList};
pub use text_input::TextInput;
