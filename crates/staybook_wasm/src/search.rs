//! Property search helpers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

const SEARCH_FORM_ID: &str = "search-form";

/// Submit the property search form if the page has one; a no-op otherwise.
#[wasm_bindgen]
pub fn submit_search_form(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document
        .get_element_by_id(SEARCH_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("no search form on this page");
        return Ok(());
    };
    form.submit()
}
