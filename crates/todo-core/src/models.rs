//! Core Models
//!
//! The todo entity shared by Model, View and Controller.

use serde::{Deserialize, Serialize};

/// Identifier of a todo, unique within the current list
pub type TodoId = u32;

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub complete: bool,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }

    /// Copy of this todo with different text, completion preserved
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            id: self.id,
            text: text.into(),
            complete: self.complete,
        }
    }

    /// Copy of this todo with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            complete: !self.complete,
        }
    }
}
