//! UI Components
//!
//! Leptos components of the to-do list page.

mod add_dialog;
mod edit_dialog;
mod modal;
mod todo_item;
mod todo_list_page;

pub use add_dialog::AddDialog;
pub use edit_dialog::EditDialog;
pub use modal::Modal;
pub use todo_item::ToDoItem;
pub use todo_list_page::ToDoListPage;
