//! Todo Row Component
//!
//! Individual item in the list: checkbox, editable text, delete button.

use leptos::prelude::*;
use todo_core::render::{RowLayout, TextStyle};
use todo_core::{edit_key, edit_outcome, EditKey, EditOutcome};
use wasm_bindgen::JsCast;

use crate::components::DELETE_CLASS;
use crate::context::use_view_context;

/// A single row; the row id attribute is what delegated listeners read
#[component]
pub fn TodoRow(row: RowLayout) -> impl IntoView {
    let ctx = use_view_context();
    let delete_label = ctx.config().delete_label;

    let id = row.id;
    let dom_id = row.dom_id();
    let checked = row.checked;
    let rendered = row.text.clone();

    // Enter commits the edit, Escape throws it away
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = edit_key(&ev.key()) else { return };
        ev.prevent_default();
        let Some(span) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) else {
            return;
        };
        let outcome = match key {
            EditKey::Commit => edit_outcome(&rendered, &span.inner_text()),
            EditKey::Cancel => EditOutcome::Discard,
        };
        match outcome {
            EditOutcome::Commit(text) => ctx.emit_edit(id, text),
            EditOutcome::Unchanged => {
                let _ = span.blur();
            }
            EditOutcome::Discard => ctx.rerender(),
        }
    };

    let text = match row.style {
        TextStyle::Struck => view! { <s>{row.text}</s> }.into_any(),
        TextStyle::Plain => row.text.into_any(),
    };

    view! {
        <li id=dom_id>
            <input type="checkbox" prop:checked=checked />
            <span class="editable" contenteditable="true" on:keydown=on_keydown>
                {text}
            </span>
            <button class=DELETE_CLASS>{delete_label}</button>
        </li>
    }
}
