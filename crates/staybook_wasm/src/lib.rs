#![cfg(target_arch = "wasm32")]
//! WebAssembly page enhancements for the Staybook booking pages.
//!
//! This crate replaces the page's inline script with typed, disposable DOM
//! wiring: alert auto-dismiss, smooth-scroll anchors, submit-button busy
//! state, image previews for file inputs, a geolocation lookup, and the live
//! booking-price display backed by `staybook_core`.
//!
//! ## Architecture
//!
//! Wiring is explicit rather than load-event driven: the page (or SPA shell)
//! passes the document it wants enhanced and receives a handle that detaches
//! every listener and cancels pending timers when dropped.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { PageEnhancements, PriceCalculator } from './staybook_wasm.js';
//!
//! await init();
//! const page = PageEnhancements.install(document);
//! const calc = PriceCalculator.install(document, 1000, 9000, 500);
//!
//! // On SPA teardown:
//! calc.dispose();
//! page.dispose();
//! ```
//!
//! ## Error Handling
//!
//! All exported methods return `Result<T, JsValue>` for JavaScript interop.
//! Missing optional page elements are skipped, not errors.

mod alerts;
mod enhance;
mod error;
mod file;
mod geo;
mod listener;
mod pricing;
mod search;
mod spinner;

pub use alerts::{show_notice, Severity};
pub use enhance::{install_preview, PageEnhancements, PreviewBinding, PreviewSlot};
pub use file::read_as_data_url;
pub use geo::{current_position, get_user_location, Coordinates};
pub use pricing::PriceCalculator;
pub use search::submit_search_form;
pub use spinner::{hide_loading_spinner, show_loading_spinner};

use wasm_bindgen::prelude::*;

// ============================================================================
// Initialization
// ============================================================================

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the WASM module. Called automatically on module load.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // Initialize console logging for Rust log macros (Info level for reduced verbosity)
    console_log::init_with_level(log::Level::Info).ok();
}
