//! UI Components
//!
//! Leptos components making up the skeleton and the list.

mod add_todo_form;
mod todo_list;
mod todo_row;

pub use add_todo_form::AddTodoForm;
pub use todo_list::{TodoList, DELETE_CLASS};
pub use todo_row::TodoRow;
