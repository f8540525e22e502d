//! Controller Integration Tests
//!
//! Drives a `Controller` over a real `TodoStore` and a recording view that
//! fires events the way a user would.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::render::{layout, ListLayout, TextStyle};
    use crate::{normalize_submission, Controller, Todo, TodoId, TodoStore, TodoView};

    /// View that records every render and lets tests trigger bound handlers
    #[derive(Default)]
    struct RecordingView {
        renders: RefCell<Vec<ListLayout>>,
        on_add: RefCell<Option<Box<dyn Fn(String)>>>,
        on_delete: RefCell<Option<Box<dyn Fn(TodoId)>>>,
        on_toggle: RefCell<Option<Box<dyn Fn(TodoId)>>>,
        on_edit: RefCell<Option<Box<dyn Fn(TodoId, String)>>>,
    }

    impl RecordingView {
        fn submit(&self, raw: &str) {
            if let Some(text) = normalize_submission(raw) {
                let handler = self.on_add.borrow();
                (handler.as_ref().expect("add handler bound"))(text);
            }
        }

        fn click_delete(&self, id: TodoId) {
            let handler = self.on_delete.borrow();
            (handler.as_ref().expect("delete handler bound"))(id);
        }

        fn click_toggle(&self, id: TodoId) {
            let handler = self.on_toggle.borrow();
            (handler.as_ref().expect("toggle handler bound"))(id);
        }

        fn finish_edit(&self, id: TodoId, text: &str) {
            let handler = self.on_edit.borrow();
            (handler.as_ref().expect("edit handler bound"))(id, text.to_string());
        }

        fn render_count(&self) -> usize {
            self.renders.borrow().len()
        }

        fn last_render(&self) -> ListLayout {
            self.renders.borrow().last().cloned().expect("at least one render")
        }
    }

    impl TodoView for RecordingView {
        fn render(&self, todos: &[Todo]) {
            self.renders.borrow_mut().push(layout(todos));
        }

        fn bind_add_todo(&self, handler: Box<dyn Fn(String)>) {
            *self.on_add.borrow_mut() = Some(handler);
        }

        fn bind_delete_todo(&self, handler: Box<dyn Fn(TodoId)>) {
            *self.on_delete.borrow_mut() = Some(handler);
        }

        fn bind_toggle_todo(&self, handler: Box<dyn Fn(TodoId)>) {
            *self.on_toggle.borrow_mut() = Some(handler);
        }

        fn bind_edit_todo(&self, handler: Box<dyn Fn(TodoId, String)>) {
            *self.on_edit.borrow_mut() = Some(handler);
        }
    }

    fn setup() -> Controller<TodoStore, RecordingView> {
        Controller::new(TodoStore::new(), RecordingView::default())
    }

    fn rows(layout: ListLayout) -> Vec<crate::render::RowLayout> {
        match layout {
            ListLayout::Rows(rows) => rows,
            ListLayout::Placeholder => Vec::new(),
        }
    }

    #[test]
    fn test_initial_render_shows_placeholder() {
        let app = setup();
        assert_eq!(app.view().render_count(), 1);
        assert_eq!(app.view().last_render(), ListLayout::Placeholder);
    }

    #[test]
    fn test_add_single_todo() {
        let app = setup();
        app.view().submit("Buy milk");

        assert_eq!(&*app.todos(), &[Todo::new(1, "Buy milk")]);
        let rows = rows(app.view().last_render());
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].checked);
        assert_eq!(rows[0].style, TextStyle::Plain);
        assert_eq!(rows[0].text, "Buy milk");
    }

    #[test]
    fn test_add_two_keeps_insertion_order() {
        let app = setup();
        app.view().submit("Buy milk");
        app.view().submit("Walk dog");

        let todos = app.todos();
        assert_eq!(todos.len(), 2);
        assert_eq!((todos[0].id, todos[0].text.as_str()), (1, "Buy milk"));
        assert_eq!((todos[1].id, todos[1].text.as_str()), (2, "Walk dog"));
    }

    #[test]
    fn test_toggle_strikes_only_that_row() {
        let app = setup();
        app.view().submit("Buy milk");
        app.view().submit("Walk dog");
        app.view().click_toggle(1);

        assert!(app.todos()[0].complete);
        let rows = rows(app.view().last_render());
        assert_eq!(rows[0].style, TextStyle::Struck);
        assert!(rows[0].checked);
        assert_eq!(rows[1].style, TextStyle::Plain);
        assert!(!rows[1].checked);
    }

    #[test]
    fn test_delete_leaves_other_item_untouched() {
        let app = setup();
        app.view().submit("Buy milk");
        app.view().submit("Walk dog");
        app.view().click_toggle(2);
        app.view().click_delete(1);

        let expected = Todo::new(2, "Walk dog").toggled();
        assert_eq!(&*app.todos(), &[expected]);
        assert_eq!(app.view().last_render().row_count(), 1);
    }

    #[test]
    fn test_whitespace_submit_is_ignored() {
        let app = setup();
        app.view().submit("   ");

        assert!(app.todos().is_empty());
        assert_eq!(app.view().render_count(), 1);
        assert_eq!(app.view().last_render(), ListLayout::Placeholder);
    }

    #[test]
    fn test_edit_missing_id_still_renders() {
        let app = setup();
        app.view().submit("Buy milk");
        let before = app.todos().to_vec();
        let renders = app.view().render_count();

        app.handle_edit_todo(99, "Nope".to_string());

        assert_eq!(&*app.todos(), before.as_slice());
        assert_eq!(app.view().render_count(), renders + 1);
        assert_eq!(app.view().last_render(), layout(&before));
    }

    #[test]
    fn test_delete_missing_id_still_renders() {
        let app = setup();
        app.view().submit("Buy milk");
        let renders = app.view().render_count();

        app.view().click_delete(7);

        assert_eq!(app.todos().len(), 1);
        assert_eq!(app.view().render_count(), renders + 1);
    }

    #[test]
    fn test_edit_event_replaces_text() {
        let app = setup();
        app.view().submit("Buy milk");
        app.view().click_toggle(1);
        app.view().finish_edit(1, "Buy oat milk");

        let todos = app.todos();
        assert_eq!(todos[0].text, "Buy oat milk");
        assert!(todos[0].complete);
    }

    #[test]
    fn test_row_actions_after_committed_edit() {
        let app = setup();
        app.view().submit("Buy milk");
        app.view().submit("Walk dog");
        app.view().finish_edit(1, "Buy oat milk");
        app.view().click_toggle(2);
        app.view().click_delete(1);

        assert_eq!(&*app.todos(), &[Todo::new(2, "Walk dog").toggled()]);
        assert_eq!(app.view().render_count(), 6);
    }

    #[test]
    fn test_deleting_everything_restores_placeholder() {
        let app = setup();
        app.view().submit("Buy milk");
        app.view().click_delete(1);

        assert_eq!(app.view().last_render(), ListLayout::Placeholder);
    }

    #[test]
    fn test_programmatic_handlers_render() {
        let app = setup();
        app.handle_add_todo("Write report".to_string());
        app.handle_toggle_todo(1);
        app.handle_delete_todo(1);
        app.handle_add_todo("Again".to_string());

        assert_eq!(&*app.todos(), &[Todo::new(1, "Again")]);
        assert_eq!(app.view().render_count(), 5);
    }
}
