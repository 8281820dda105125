//! Loading-spinner state for clickable elements.
//!
//! The restore-capable counterpart to the one-way submit busy state: callers
//! keep the element's original markup and hand it back when the work is done.

use wasm_bindgen::prelude::*;
use web_sys::HtmlButtonElement;

const LOADING_HTML: &str = r#"<span class="spinner"></span> Loading..."#;

/// Swap a button's label for a spinner and disable it.
///
/// Capture `element.innerHTML` first; [`hide_loading_spinner`] needs it to
/// restore the label.
#[wasm_bindgen]
pub fn show_loading_spinner(element: &HtmlButtonElement) {
    element.set_inner_html(LOADING_HTML);
    element.set_disabled(true);
}

/// Restore a button's original markup and re-enable it.
#[wasm_bindgen]
pub fn hide_loading_spinner(element: &HtmlButtonElement, original_html: &str) {
    element.set_inner_html(original_html);
    element.set_disabled(false);
}
