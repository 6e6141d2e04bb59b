//! TUI screens for interactive workflows.

mod browse;
mod confirm;
mod item_form;
mod select;

pub use browse::{browse, BrowseExit, BrowseScreen};
pub use confirm::ConfirmDialog;
pub use item_form::{ItemForm, ItemFormOutput};
pub use select::{select_from_list, select_from_list_with_header};
