//! View Configuration
//!
//! Labels, mount point and log level. Defaults reproduce the stock page; a
//! page may override any field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="todo-mvc-config">{"title": "Chores"}</script>
//! ```

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Id of the optional config script element
pub const CONFIG_ELEMENT_ID: &str = "todo-mvc-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// CSS selector of the element the app mounts into
    pub root_selector: String,
    pub title: String,
    pub input_placeholder: String,
    pub submit_label: String,
    pub delete_label: String,
    /// Shown instead of rows when the list is empty
    pub empty_message: String,
    pub log_level: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            root_selector: "#root".to_string(),
            title: "Todos".to_string(),
            input_placeholder: "Add todo".to_string(),
            submit_label: "Submit".to_string(),
            delete_label: "Delete".to_string(),
            empty_message: "Nothing to do! Add a task ?".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configured level, `Info` when unrecognized
    pub fn log_level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }

    /// Read the page's config block, falling back to defaults
    pub fn load() -> (Self, Option<ConfigError>) {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            None => (Self::default(), None),
            Some(json) => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}
