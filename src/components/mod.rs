//! UI Components
//!
//! Leptos components for the list surface.

mod clear_button;
mod filter_box;
mod item_form;
mod item_list;
mod item_row;

pub use clear_button::ClearButton;
pub use filter_box::FilterBox;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
