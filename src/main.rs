//! Todo MVC Frontend Entry Point
//!
//! Builds the Model and the View and hands both to the Controller.

mod app;
mod components;
mod config;
mod context;
mod logging;
mod view;

use todo_core::{Controller, TodoStore};

use config::ViewConfig;
use view::DomView;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = ViewConfig::load();
    logging::init(config.log_level_filter());
    if let Some(e) = config_error {
        log::warn!("{}, using defaults", e);
    }

    let view = match DomView::mount(config) {
        Ok(view) => view,
        Err(e) => {
            log::error!("cannot start: {}", e);
            return;
        }
    };

    // Handlers bound by the controller keep the model alive
    let _controller = Controller::new(TodoStore::new(), view);
}
