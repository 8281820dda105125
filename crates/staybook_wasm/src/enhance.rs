//! Page-wide enhancements: smooth-scroll anchors, submit busy state, alert
//! auto-dismiss, and image previews for file inputs.
//!
//! [`PageEnhancements::install`] takes the document to enhance instead of
//! listening for a load event, and returns a handle owning every listener
//! and pending timer. Dropping (or `dispose()`-ing) the handle detaches all
//! of it, so single-page apps can tear a page down cleanly.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlImageElement, HtmlInputElement, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::alerts::{self, ScheduledDismissal, Severity};
use crate::error::IntoJsOption;
use crate::file;
use crate::listener::EventHook;

/// Bounding box applied to lazily created preview images, in pixels.
const PREVIEW_MAX_PX: u32 = 200;

/// Busy label swapped into a submit button while its form submits.
const PROCESSING_HTML: &str = r#"<span class="spinner"></span> Processing..."#;

fn elements_of(list: NodeList) -> impl Iterator<Item = Element> {
    (0..list.length())
        .filter_map(move |index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

// ============================================================================
// PageEnhancements
// ============================================================================

/// Handle over every enhancement installed on a document.
///
/// Listeners and the alert-dismiss timer live exactly as long as this handle.
#[wasm_bindgen]
pub struct PageEnhancements {
    hooks: Vec<EventHook>,
    _alert_sweep: ScheduledDismissal,
}

#[wasm_bindgen]
impl PageEnhancements {
    /// Wire all page enhancements onto `document`.
    ///
    /// Elements are discovered once, at install time; anchors, forms, or file
    /// inputs added later need their own installation. Alerts are the
    /// exception: the dismiss sweep collects them when its timer fires.
    pub fn install(document: &Document) -> Result<PageEnhancements, JsValue> {
        let window = web_sys::window().js_ok_or("no window available")?;

        let mut hooks = Vec::new();
        hooks.extend(wire_smooth_scroll(document)?);
        hooks.extend(wire_submit_busy(document)?);
        hooks.extend(wire_image_previews(document)?);
        let alert_sweep = alerts::schedule_auto_dismiss(&window, document)?;

        log::info!("page enhancements installed ({} listeners)", hooks.len());
        Ok(PageEnhancements {
            hooks,
            _alert_sweep: alert_sweep,
        })
    }

    /// Detach every listener and cancel the pending alert sweep.
    pub fn dispose(self) {
        log::debug!("page enhancements disposed ({} listeners)", self.hooks.len());
    }
}

// ============================================================================
// Smooth-scroll anchors
// ============================================================================

fn wire_smooth_scroll(document: &Document) -> Result<Vec<EventHook>, JsValue> {
    let anchors = document.query_selector_all(r#"a[href^="#"]"#)?;

    let mut hooks = Vec::new();
    for anchor in elements_of(anchors) {
        let document = document.clone();
        hooks.push(EventHook::attach(&anchor, "click", move |event: Event| {
            // In-page anchors never navigate, whether or not the target exists.
            event.prevent_default();

            let Some(anchor) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let fragment = href.trim_start_matches('#');
            let Some(target) = document.get_element_by_id(fragment) else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?);
    }
    Ok(hooks)
}

// ============================================================================
// Submit busy state
// ============================================================================

fn wire_submit_busy(document: &Document) -> Result<Vec<EventHook>, JsValue> {
    let forms = document.query_selector_all("form")?;

    let mut hooks = Vec::new();
    for form in elements_of(forms) {
        let busy_form = form.clone();
        hooks.push(EventHook::attach(&form, "submit", move |_event: Event| {
            let Ok(Some(button)) = busy_form.query_selector("button[type=submit]") else {
                return;
            };
            if let Some(button) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
                // One-way: the submission navigates away, so nothing here
                // restores the label. Callers needing restoration use the
                // spinner pair instead.
                button.set_inner_html(PROCESSING_HTML);
                button.set_disabled(true);
            }
        })?);
    }
    Ok(hooks)
}

// ============================================================================
// Image preview
// ============================================================================

/// Where a file input's preview image lives.
///
/// Either bound to an element the caller already owns, or created lazily
/// next to the input on first use and reused for every later selection.
#[derive(Clone)]
pub struct PreviewSlot {
    element: Rc<RefCell<Option<HtmlImageElement>>>,
}

impl PreviewSlot {
    /// A slot that lazily creates its image beside the input.
    pub fn lazy() -> Self {
        Self {
            element: Rc::new(RefCell::new(None)),
        }
    }

    /// A slot bound to an element the page already provides.
    pub fn bound(element: HtmlImageElement) -> Self {
        Self {
            element: Rc::new(RefCell::new(Some(element))),
        }
    }

    /// Get the preview image, creating and inserting it after `input` on
    /// first use.
    fn ensure(
        &self,
        document: &Document,
        input: &HtmlInputElement,
    ) -> Result<HtmlImageElement, JsValue> {
        if let Some(existing) = self.element.borrow().as_ref() {
            return Ok(existing.clone());
        }

        let image: HtmlImageElement = document.create_element("img")?.unchecked_into();
        image.set_class_name("img-thumbnail");
        let style = image.style();
        style.set_property("max-width", &format!("{PREVIEW_MAX_PX}px"))?;
        style.set_property("max-height", &format!("{PREVIEW_MAX_PX}px"))?;
        style.set_property("margin-top", "10px")?;
        input.insert_adjacent_element("afterend", &image)?;

        *self.element.borrow_mut() = Some(image.clone());
        Ok(image)
    }
}

/// An installed single-input preview. Dropping it detaches the listener.
pub struct PreviewBinding {
    _hook: EventHook,
}

/// Wire an image preview onto one specific file input, rendering into `slot`.
///
/// This is the explicit-binding form: pass [`PreviewSlot::bound`] to render
/// into an element the page already owns, or [`PreviewSlot::lazy`] to create
/// one beside the input on first use.
pub fn install_preview(
    document: &Document,
    input: &HtmlInputElement,
    slot: PreviewSlot,
) -> Result<PreviewBinding, JsValue> {
    Ok(PreviewBinding {
        _hook: wire_preview(document, input, slot)?,
    })
}

fn wire_image_previews(document: &Document) -> Result<Vec<EventHook>, JsValue> {
    let inputs = document.query_selector_all(r#"input[type="file"]"#)?;

    let mut hooks = Vec::new();
    for element in elements_of(inputs) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        hooks.push(wire_preview(document, &input, PreviewSlot::lazy())?);
    }
    Ok(hooks)
}

/// Wire a preview onto one file input, rendering into `slot`.
fn wire_preview(
    document: &Document,
    input: &HtmlInputElement,
    slot: PreviewSlot,
) -> Result<EventHook, JsValue> {
    let document = document.clone();
    let change_input = input.clone();
    EventHook::attach(input, "change", move |_event: Event| {
        let Some(file) = change_input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if !file.type_().starts_with("image/") {
            return;
        }

        let document = document.clone();
        let input = change_input.clone();
        let slot = slot.clone();
        spawn_local(async move {
            match file::read_as_data_url(&file).await {
                Ok(data_url) => match slot.ensure(&document, &input) {
                    Ok(image) => image.set_src(&data_url),
                    Err(err) => log::warn!("preview image could not be created: {err:?}"),
                },
                Err(err) => {
                    log::warn!("reading '{}' for preview failed: {err:?}", file.name());
                    alerts::show_notice(
                        &document,
                        Severity::Warning,
                        "Could not preview the selected image.",
                    )
                    .ok();
                }
            }
        });
    })
}
