//! Awaitable file reading.
//!
//! `FileReader` is callback-driven; this module bridges its one-shot
//! load/error events into a `Promise` so callers can `await` the read and
//! compose error handling instead of logging from inside a callback.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, ProgressEvent};

use crate::error::IntoJsOption;

/// Read `file` and resolve to its contents as a base64 data URL.
///
/// Rejects with the reader's error when the underlying read fails. Callers
/// deciding whether to read at all (e.g. only for `image/*` types) check the
/// file's MIME type first; this function reads whatever it is given.
pub async fn read_as_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;

    let promise = Promise::new(&mut |resolve, reject| {
        let loaded_reader = reader.clone();
        let resolve = resolve.clone();
        let reject_on_load = reject.clone();
        let onload = Closure::once_into_js(move |_event: ProgressEvent| {
            match loaded_reader.result() {
                Ok(value) => resolve.call1(&JsValue::UNDEFINED, &value),
                Err(err) => reject_on_load.call1(&JsValue::UNDEFINED, &err),
            }
            .ok();
        });

        let error_reader = reader.clone();
        let reject = reject.clone();
        let onerror = Closure::once_into_js(move |_event: ProgressEvent| {
            let reason = error_reader
                .error()
                .map(JsValue::from)
                .unwrap_or_else(|| JsValue::from_str("file read failed"));
            reject.call1(&JsValue::UNDEFINED, &reason).ok();
        });

        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file)?;

    let value = JsFuture::from(promise).await?;
    value
        .as_string()
        .js_ok_or("FileReader produced a non-string result")
}
