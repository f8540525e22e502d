//! DOM View
//!
//! `TodoView` implementation backed by Leptos. Mounting builds the skeleton
//! once; `render` swaps the list snapshot and Leptos redraws the container.

use leptos::prelude::*;
use thiserror::Error;
use todo_core::{Todo, TodoId, TodoView};
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::ViewConfig;
use crate::context::ViewContext;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("no document available")]
    NoDocument,
    #[error("selector {0:?} is not valid")]
    InvalidSelector(String),
    #[error("mount point {0:?} not found")]
    MissingRoot(String),
}

#[derive(Clone, Copy)]
pub struct DomView {
    ctx: ViewContext,
}

impl DomView {
    /// Attach the skeleton to the configured root element
    pub fn mount(config: ViewConfig) -> Result<Self, ViewError> {
        let root = find_root(&config.root_selector)?;
        let ctx = ViewContext::new(config);
        leptos::mount::mount_to(root, move || view! { <App ctx=ctx /> }).forget();
        log::info!("view mounted");
        Ok(Self { ctx })
    }
}

fn find_root(selector: &str) -> Result<web_sys::HtmlElement, ViewError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or(ViewError::NoDocument)?;
    document
        .query_selector(selector)
        .map_err(|_| ViewError::InvalidSelector(selector.to_string()))?
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| ViewError::MissingRoot(selector.to_string()))
}

impl TodoView for DomView {
    fn render(&self, todos: &[Todo]) {
        log::debug!("render {} row(s)", todos.len());
        self.ctx.show(todos);
    }

    fn bind_add_todo(&self, handler: Box<dyn Fn(String)>) {
        self.ctx.bind_add(handler);
    }

    fn bind_delete_todo(&self, handler: Box<dyn Fn(TodoId)>) {
        self.ctx.bind_delete(handler);
    }

    fn bind_toggle_todo(&self, handler: Box<dyn Fn(TodoId)>) {
        self.ctx.bind_toggle(handler);
    }

    fn bind_edit_todo(&self, handler: Box<dyn Fn(TodoId, String)>) {
        self.ctx.bind_edit(handler);
    }
}
