//! Todo List Component
//!
//! The list container. Delete and toggle are caught by delegated listeners
//! on the container and resolved to a todo through the enclosing row's id.

use leptos::prelude::*;
use todo_core::render::ListLayout;
use todo_core::{parse_row_id, TodoId};
use wasm_bindgen::JsCast;

use crate::components::TodoRow;
use crate::context::use_view_context;

/// Class of the per-row delete button
pub const DELETE_CLASS: &str = "delete";

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_view_context();
    let empty_message = ctx.config().empty_message;
    let layout = Memo::new(move |_| ctx.layout());

    let rows = move || {
        layout.with(|(generation, list)| match list {
            ListLayout::Placeholder => Vec::new(),
            ListLayout::Rows(rows) => rows.iter().cloned().map(|row| (*generation, row)).collect::<Vec<_>>(),
        })
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = event_element(&ev) else { return };
        let is_delete = target.class_name().split_whitespace().any(|class| class == DELETE_CLASS);
        if is_delete {
            if let Some(id) = row_id(&target) {
                ctx.emit_delete(id);
            }
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(target) = event_element(&ev) else { return };
        let is_checkbox = target
            .dyn_ref::<web_sys::HtmlInputElement>()
            .is_some_and(|input| input.type_() == "checkbox");
        if is_checkbox {
            if let Some(id) = row_id(&target) {
                ctx.emit_toggle(id);
            }
        }
    };

    view! {
        <ul class="todo-list" on:click=on_click on:change=on_change>
            // Show default message
            {move || {
                layout
                    .with(|(_, list)| *list == ListLayout::Placeholder)
                    .then(|| view! { <p>{empty_message.clone()}</p> })
            }}
            <For
                each=rows
                key=|(generation, row)| (*generation, row.id)
                children=|(_, row)| view! { <TodoRow row=row /> }
            />
        </ul>
    }
}

fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target().and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

/// Id of the row enclosing `target`; malformed rows are logged and ignored
fn row_id(target: &web_sys::Element) -> Option<TodoId> {
    let row = match target.closest("li") {
        Ok(Some(row)) => row,
        _ => {
            log::warn!("event outside of any row ignored");
            return None;
        }
    };
    match parse_row_id(&row.id()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("row event ignored: {}", e);
            None
        }
    }
}
