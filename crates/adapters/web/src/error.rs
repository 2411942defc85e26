//! Browser adapter errors.

use wasm_bindgen::JsValue;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No `window` global (not running in a browser page).
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("no document available")]
    NoDocument,

    /// A required element is missing from the page.
    #[error("element #{0} not found")]
    MissingElement(String),

    /// An element is not of the expected kind.
    #[error("element #{id} is not {expected}")]
    WrongElement { id: String, expected: &'static str },

    /// JavaScript interop error.
    #[error("javascript error: {0}")]
    JavaScript(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::JavaScript(message)
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
