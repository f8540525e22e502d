//! Controller
//!
//! Wires a model to a view. Holds no state of its own: model changes drive
//! `render`, view events drive model mutations.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::models::{Todo, TodoId};
use crate::store::{ChangeNotifier, Mutator};
use crate::view::TodoView;

pub struct Controller<M, V> {
    model: Rc<RefCell<M>>,
    view: Rc<V>,
}

impl<M, V> Controller<M, V>
where
    M: Mutator + ChangeNotifier + 'static,
    V: TodoView + 'static,
{
    pub fn new(model: M, view: V) -> Self {
        let model = Rc::new(RefCell::new(model));
        let view = Rc::new(view);

        let listener_view = Rc::clone(&view);
        model
            .borrow_mut()
            .register_change_listener(Box::new(move |todos: &[Todo]| on_todo_list_changed(&*listener_view, todos)));

        // Display initial todos
        on_todo_list_changed(&*view, model.borrow().todos());

        let m = Rc::clone(&model);
        view.bind_add_todo(Box::new(move |text| m.borrow_mut().add(text)));
        let m = Rc::clone(&model);
        view.bind_delete_todo(Box::new(move |id| m.borrow_mut().delete(id)));
        let m = Rc::clone(&model);
        view.bind_toggle_todo(Box::new(move |id| m.borrow_mut().toggle(id)));
        let m = Rc::clone(&model);
        view.bind_edit_todo(Box::new(move |id, text| m.borrow_mut().edit(id, text)));

        log::debug!("controller wired");
        Self { model, view }
    }

    pub fn handle_add_todo(&self, text: String) {
        self.model.borrow_mut().add(text);
    }

    pub fn handle_edit_todo(&self, id: TodoId, text: String) {
        self.model.borrow_mut().edit(id, text);
    }

    pub fn handle_delete_todo(&self, id: TodoId) {
        self.model.borrow_mut().delete(id);
    }

    pub fn handle_toggle_todo(&self, id: TodoId) {
        self.model.borrow_mut().toggle(id);
    }

    /// Current list, borrowed from the model
    pub fn todos(&self) -> Ref<'_, [Todo]> {
        Ref::map(self.model.borrow(), |model| model.todos())
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

fn on_todo_list_changed<V: TodoView>(view: &V, todos: &[Todo]) {
    log::debug!("rendering {} todo(s)", todos.len());
    view.render(todos);
}
