//! Render Layout
//!
//! DOM-independent description of what a full list render draws.
//! Views materialize the layout; they never look at a snapshot directly.

use crate::models::{Todo, TodoId};

/// How the text of a row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Struck,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub id: TodoId,
    /// Initial state of the toggle control
    pub checked: bool,
    pub text: String,
    pub style: TextStyle,
}

impl RowLayout {
    /// Value of the row's id attribute
    pub fn dom_id(&self) -> String {
        self.id.to_string()
    }
}

/// Content of the list container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLayout {
    /// The empty-state message and nothing else
    Placeholder,
    Rows(Vec<RowLayout>),
}

impl ListLayout {
    pub fn row_count(&self) -> usize {
        match self {
            ListLayout::Placeholder => 0,
            ListLayout::Rows(rows) => rows.len(),
        }
    }
}

pub fn row_layout(todo: &Todo) -> RowLayout {
    RowLayout {
        id: todo.id,
        checked: todo.complete,
        text: todo.text.clone(),
        style: if todo.complete { TextStyle::Struck } else { TextStyle::Plain },
    }
}

/// Layout of a full snapshot, rows in list order
pub fn layout(todos: &[Todo]) -> ListLayout {
    if todos.is_empty() {
        ListLayout::Placeholder
    } else {
        ListLayout::Rows(todos.iter().map(row_layout).collect())
    }
}
