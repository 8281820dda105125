//! Error handling utilities for WASM bindings.

use wasm_bindgen::JsValue;

/// Extension trait for converting Results to JS-compatible errors.
pub trait IntoJsResult<T> {
    /// Convert to a Result with JsValue error.
    fn js_err(self) -> Result<T, JsValue>;
}

impl<T, E: std::fmt::Display> IntoJsResult<T> for Result<T, E> {
    fn js_err(self) -> Result<T, JsValue> {
        self.map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Extension trait for converting Options to JS-compatible errors.
///
/// DOM lookups come back as `Option`; most of the page elements this crate
/// touches are optional and silently skipped, but the few that are required
/// (the window itself, the document body for notices) use this helper.
pub trait IntoJsOption<T> {
    /// Convert to a Result with JsValue error using the provided message.
    fn js_ok_or(self, msg: &str) -> Result<T, JsValue>;
}

impl<T> IntoJsOption<T> for Option<T> {
    fn js_ok_or(self, msg: &str) -> Result<T, JsValue> {
        self.ok_or_else(|| JsValue::from_str(msg))
    }
}
