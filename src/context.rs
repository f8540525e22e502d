//! View Context
//!
//! Shared view state provided via Leptos Context API: the snapshot being
//! rendered, the bound event handlers and the labels.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use todo_core::render::{layout, ListLayout};
use todo_core::{Todo, TodoId};

use crate::config::ViewConfig;

type TextHandler = Rc<dyn Fn(String)>;
type IdHandler = Rc<dyn Fn(TodoId)>;
type EditHandler = Rc<dyn Fn(TodoId, String)>;

/// Handlers bound by the controller, `None` until bound
#[derive(Clone, Default)]
struct Handlers {
    add: Option<TextHandler>,
    delete: Option<IdHandler>,
    toggle: Option<IdHandler>,
    edit: Option<EditHandler>,
}

/// Last list handed to `render`
///
/// `generation` advances on every render so rows are keyed per render and
/// rebuilt from scratch, never patched.
#[derive(Clone, Debug, Default)]
struct Snapshot {
    generation: u64,
    todos: Vec<Todo>,
}

/// View-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ViewContext {
    snapshot: RwSignal<Snapshot>,
    handlers: StoredValue<Handlers, LocalStorage>,
    config: StoredValue<ViewConfig>,
}

impl ViewContext {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            snapshot: RwSignal::new(Snapshot::default()),
            handlers: StoredValue::new_local(Handlers::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ViewConfig {
        self.config.get_value()
    }

    /// Replace the drawn snapshot
    pub fn show(&self, todos: &[Todo]) {
        self.snapshot.update(|s| {
            s.generation += 1;
            s.todos = todos.to_vec();
        });
    }

    /// Redraw the current snapshot without changing it
    pub fn rerender(&self) {
        self.snapshot.update(|s| s.generation += 1);
    }

    /// Render generation and layout of the current snapshot
    pub fn layout(&self) -> (u64, ListLayout) {
        self.snapshot.with(|s| (s.generation, layout(&s.todos)))
    }

    // ========================
    // Binding
    // ========================

    pub fn bind_add(&self, handler: Box<dyn Fn(String)>) {
        self.handlers.update_value(|h| h.add = Some(Rc::from(handler)));
    }

    pub fn bind_delete(&self, handler: Box<dyn Fn(TodoId)>) {
        self.handlers.update_value(|h| h.delete = Some(Rc::from(handler)));
    }

    pub fn bind_toggle(&self, handler: Box<dyn Fn(TodoId)>) {
        self.handlers.update_value(|h| h.toggle = Some(Rc::from(handler)));
    }

    pub fn bind_edit(&self, handler: Box<dyn Fn(TodoId, String)>) {
        self.handlers.update_value(|h| h.edit = Some(Rc::from(handler)));
    }

    // ========================
    // Emitting
    // ========================
    // Handlers are cloned out of the arena before running, so a handler that
    // ends up re-rendering never runs while the slot is borrowed.

    pub fn emit_add(&self, text: String) {
        match self.handlers.with_value(|h| h.add.clone()) {
            Some(handler) => handler(text),
            None => log::debug!("add ignored, no handler bound"),
        }
    }

    pub fn emit_delete(&self, id: TodoId) {
        match self.handlers.with_value(|h| h.delete.clone()) {
            Some(handler) => handler(id),
            None => log::debug!("delete {} ignored, no handler bound", id),
        }
    }

    pub fn emit_toggle(&self, id: TodoId) {
        match self.handlers.with_value(|h| h.toggle.clone()) {
            Some(handler) => handler(id),
            None => log::debug!("toggle {} ignored, no handler bound", id),
        }
    }

    pub fn emit_edit(&self, id: TodoId, text: String) {
        match self.handlers.with_value(|h| h.edit.clone()) {
            Some(handler) => handler(id, text),
            None => log::debug!("edit {} ignored, no handler bound", id),
        }
    }
}

/// Get the view context provided by `App`
pub fn use_view_context() -> ViewContext {
    use_context::<ViewContext>().expect("ViewContext should be provided")
}
