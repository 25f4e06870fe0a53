//! UI Components
//!
//! Leptos components for the widget.

mod delete_confirm_button;
mod todo_form;
mod todo_row;
mod todo_table;

pub use delete_confirm_button::DeleteConfirmButton;
pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
pub use todo_table::TodoTable;
