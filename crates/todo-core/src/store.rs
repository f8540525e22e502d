//! Todo Store
//!
//! The Model: sole owner of the todo list and sole authority for mutating it.
//! Every mutation, including one that matches no item, notifies listeners
//! exactly once with the full current list.

use crate::models::{Todo, TodoId};

/// Callback invoked with the full list after every mutation
pub type ChangeListener = Box<dyn FnMut(&[Todo])>;

/// Handle of a listener in the observer registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Mutation capability of a todo model
pub trait Mutator {
    fn add(&mut self, text: String);
    fn edit(&mut self, id: TodoId, text: String);
    fn delete(&mut self, id: TodoId);
    fn toggle(&mut self, id: TodoId);
}

/// Observation capability of a todo model
pub trait ChangeNotifier {
    /// Current list snapshot
    fn todos(&self) -> &[Todo];

    /// Replace any registered listeners with `listener`
    fn register_change_listener(&mut self, listener: ChangeListener);
}

/// In-memory todo list with change notification
#[derive(Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener: usize,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    // ========================
    // Listeners
    // ========================

    /// Single-subscriber registration: drops every previous listener
    pub fn register_change_listener(&mut self, listener: ChangeListener) -> ListenerId {
        self.listeners.clear();
        self.add_change_listener(listener)
    }

    /// Append a listener to the registry; listeners fire in registration order
    pub fn add_change_listener(&mut self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener, returns false if it was not registered
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        log::debug!("notifying {} listener(s), {} todo(s)", self.listeners.len(), self.todos.len());
        let todos = &self.todos;
        for (_, listener) in self.listeners.iter_mut() {
            listener(todos);
        }
    }

    // ========================
    // Mutations
    // ========================

    /// One past the largest id present, or 1 for an empty list
    fn next_id(&self) -> TodoId {
        self.todos.iter().map(|todo| todo.id).max().map_or(1, |max| max + 1)
    }

    pub fn add_todo(&mut self, text: impl Into<String>) -> TodoId {
        let todo = Todo::new(self.next_id(), text);
        let id = todo.id;
        log::debug!("add todo {}: {:?}", id, todo.text);
        self.todos.push(todo);
        self.notify();
        id
    }

    pub fn edit_todo(&mut self, id: TodoId, text: impl Into<String>) {
        let text = text.into();
        log::debug!("edit todo {}: {:?}", id, text);
        self.todos = self
            .todos
            .iter()
            .map(|todo| if todo.id == id { todo.with_text(text.clone()) } else { todo.clone() })
            .collect();
        self.notify();
    }

    pub fn delete_todo(&mut self, id: TodoId) {
        log::debug!("delete todo {}", id);
        self.todos.retain(|todo| todo.id != id);
        self.notify();
    }

    pub fn toggle_todo(&mut self, id: TodoId) {
        log::debug!("toggle todo {}", id);
        self.todos = self
            .todos
            .iter()
            .map(|todo| if todo.id == id { todo.toggled() } else { todo.clone() })
            .collect();
        self.notify();
    }
}

impl Mutator for TodoStore {
    fn add(&mut self, text: String) {
        self.add_todo(text);
    }

    fn edit(&mut self, id: TodoId, text: String) {
        self.edit_todo(id, text);
    }

    fn delete(&mut self, id: TodoId) {
        self.delete_todo(id);
    }

    fn toggle(&mut self, id: TodoId) {
        self.toggle_todo(id);
    }
}

impl ChangeNotifier for TodoStore {
    fn todos(&self) -> &[Todo] {
        TodoStore::todos(self)
    }

    fn register_change_listener(&mut self, listener: ChangeListener) {
        TodoStore::register_change_listener(self, listener);
    }
}
