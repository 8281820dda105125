//! One-shot geolocation lookup.
//!
//! Wraps `navigator.geolocation.getCurrentPosition` in a `Promise` so the
//! lookup is awaitable and its failure reaches the caller as an error value
//! instead of dying in a console callback. Intended for pre-filling the
//! property search with the visitor's position.

use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError};

use crate::error::{IntoJsOption, IntoJsResult};

/// A captured position, ready to cross the JS boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Build a promise around a callback-style browser request.
///
/// `issue` receives the resolve/reject functions and starts the request. If
/// issuing itself fails synchronously (e.g. the API is blocked by a
/// permissions policy), the promise rejects with that error instead of never
/// settling.
fn settling_promise<F>(issue: F) -> Promise
where
    F: FnOnce(&Function, &Function) -> Result<(), JsValue>,
{
    let mut issue = Some(issue);
    Promise::new(&mut |resolve, reject| {
        let Some(issue) = issue.take() else {
            return;
        };
        if let Err(err) = issue(&resolve, &reject) {
            reject.call1(&JsValue::UNDEFINED, &err).ok();
        }
    })
}

/// Request the visitor's current position once.
///
/// Errors when the browser exposes no geolocation capability, when the
/// visitor denies the permission prompt, or when positioning fails.
pub async fn current_position() -> Result<Coordinates, JsValue> {
    let window = web_sys::window().js_ok_or("no window available")?;
    let geolocation = window.navigator().geolocation()?;

    let promise = settling_promise(|resolve, reject| {
        let resolve = resolve.clone();
        let success = Closure::once_into_js(move |position: Position| {
            resolve.call1(&JsValue::UNDEFINED, &position).ok();
        });

        let reject = reject.clone();
        let failure = Closure::once_into_js(move |error: PositionError| {
            reject.call1(&JsValue::UNDEFINED, &error).ok();
        });

        geolocation.get_current_position_with_error_callback(
            success.unchecked_ref(),
            Some(failure.unchecked_ref()),
        )
    });

    let position: Position = JsFuture::from(promise).await?.unchecked_into();
    let coords = position.coords();
    Ok(Coordinates {
        latitude: coords.latitude(),
        longitude: coords.longitude(),
    })
}

/// Request the visitor's position and return it as a `{ latitude, longitude }`
/// object.
///
/// Denial or failure rejects the returned promise; the page decides whether
/// to show a notice or quietly fall back to manual entry.
#[wasm_bindgen]
pub async fn get_user_location() -> Result<JsValue, JsValue> {
    let coords = current_position().await.inspect_err(|err| {
        log::info!("geolocation unavailable or denied: {err:?}");
    })?;

    log::debug!(
        "visitor position captured: {}, {}",
        coords.latitude,
        coords.longitude
    );
    serde_wasm_bindgen::to_value(&coords).js_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn settling_promise_rejects_when_issuing_fails_synchronously() {
        let promise =
            settling_promise(|_resolve, _reject| Err(JsValue::from_str("blocked by policy")));

        let err = JsFuture::from(promise)
            .await
            .expect_err("promise should reject, not hang");
        assert_eq!(err.as_string().as_deref(), Some("blocked by policy"));
    }

    #[wasm_bindgen_test]
    async fn settling_promise_passes_resolution_through() {
        let promise = settling_promise(|resolve, _reject| {
            resolve
                .call1(&JsValue::UNDEFINED, &JsValue::from_f64(7.0))
                .map(|_| ())
        });

        let value = JsFuture::from(promise)
            .await
            .expect("promise should resolve");
        assert_eq!(value.as_f64(), Some(7.0));
    }
}
