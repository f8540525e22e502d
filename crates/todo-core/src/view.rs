//! View Contract
//!
//! What a rendering surface must offer the controller, plus the input rules
//! every surface shares.

use thiserror::Error;

use crate::models::{Todo, TodoId};

/// A surface that draws todo lists and reports user intent
///
/// Handlers receive already-validated values: trimmed non-empty text for
/// adds and edits, parsed ids for row actions.
pub trait TodoView {
    /// Rebuild the list from a full snapshot
    fn render(&self, todos: &[Todo]);

    fn bind_add_todo(&self, handler: Box<dyn Fn(String)>);

    fn bind_delete_todo(&self, handler: Box<dyn Fn(TodoId)>);

    fn bind_toggle_todo(&self, handler: Box<dyn Fn(TodoId)>);

    /// Surfaces without in-place editing may ignore this
    fn bind_edit_todo(&self, _handler: Box<dyn Fn(TodoId, String)>) {}
}

/// Text to submit for raw input, `None` when blank
pub fn normalize_submission(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// What committing an in-place edit amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// New trimmed text to store
    Commit(String),
    /// Same text as rendered, nothing to store
    Unchanged,
    /// Blank text; the row is redrawn from the last snapshot
    Discard,
}

/// Decide an edit given the rendered text and the edited text
pub fn edit_outcome(rendered: &str, current: &str) -> EditOutcome {
    match normalize_submission(current) {
        None => EditOutcome::Discard,
        Some(text) if text == rendered => EditOutcome::Unchanged,
        Some(text) => EditOutcome::Commit(text),
    }
}

/// Key that ends an in-place edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Commit,
    Cancel,
}

/// Edits end on a key press only; losing focus commits nothing
pub fn edit_key(key: &str) -> Option<EditKey> {
    match key {
        "Enter" => Some(EditKey::Commit),
        "Escape" => Some(EditKey::Cancel),
        _ => None,
    }
}

/// Row identifier that does not name a todo
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIdError {
    #[error("row has no id attribute")]
    Missing,
    #[error("row id {0:?} is not a todo id")]
    Malformed(String),
}

/// Parse the id attribute carried by a rendered row
pub fn parse_row_id(raw: &str) -> Result<TodoId, RowIdError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RowIdError::Missing);
    }
    raw.parse::<TodoId>()
        .map_err(|_| RowIdError::Malformed(raw.to_string()))
}
