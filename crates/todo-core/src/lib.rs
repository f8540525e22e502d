//! Todo Core
//!
//! Platform-independent half of the todo list editor:
//! - models: the `Todo` entity
//! - store: the Model, sole owner of the list
//! - view: the contract a rendering surface implements
//! - render: DOM-independent layout of a list snapshot
//! - controller: wiring between Model and View

mod models;
mod store;
mod view;
mod controller;
pub mod render;

#[cfg(test)]
mod tests;

pub use models::{Todo, TodoId};
pub use store::{ChangeListener, ChangeNotifier, ListenerId, Mutator, TodoStore};
pub use view::{
    edit_key, edit_outcome, normalize_submission, parse_row_id, EditKey, EditOutcome, RowIdError, TodoView,
};
pub use controller::Controller;
