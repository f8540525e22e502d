//! Add Todo Form Component
//!
//! Text input plus submit button. Blank input is dropped without feedback.

use leptos::html::Input;
use leptos::prelude::*;
use todo_core::normalize_submission;

use crate::context::use_view_context;

#[component]
pub fn AddTodoForm() -> impl IntoView {
    let ctx = use_view_context();
    let config = ctx.config();
    let input_ref = NodeRef::<Input>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else { return };
        if let Some(text) = normalize_submission(&input.value()) {
            ctx.emit_add(text);
            input.set_value("");
        }
    };

    view! {
        <form on:submit=submit>
            <input
                type="text"
                name="todo"
                placeholder=config.input_placeholder
                node_ref=input_ref
            />
            <button type="submit">{config.submit_label}</button>
        </form>
    }
}
