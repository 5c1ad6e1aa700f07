use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("One or more themes do not have a target state transition or are unreachable from other states")]
    InvalidThemeMap,

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<WidgetError> for String {
    fn from(err: WidgetError) -> Self {
        err.to_string()
    }
}

/// Best-effort message for a value thrown by a browser API.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}

pub fn dom_error(value: JsValue) -> WidgetError {
    WidgetError::Dom(js_error_message(&value))
}
