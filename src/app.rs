//! Todo MVC App
//!
//! The fixed skeleton: heading, add form and list container. Built once at
//! mount; only the list container's content changes afterwards.

use leptos::prelude::*;

use crate::components::{AddTodoForm, TodoList};
use crate::context::ViewContext;

#[component]
pub fn App(ctx: ViewContext) -> impl IntoView {
    // Provide context to all children
    provide_context(ctx);
    let title = ctx.config().title;

    view! {
        <h1>{title}</h1>
        <AddTodoForm />
        <TodoList />
    }
}
