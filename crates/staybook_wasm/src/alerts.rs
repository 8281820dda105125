//! Page alerts: severity classification, timed auto-dismiss, and the notice
//! channel other enhancements use to surface non-blocking failures.
//!
//! Success and info alerts fade out and are removed after a fixed delay;
//! warning and danger alerts stay until the user dismisses them. The
//! scheduled dismissal cancels if its owning handle is dropped before the
//! delay elapses.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::IntoJsOption;

/// Delay before success/info alerts start fading, in milliseconds.
pub(crate) const DISMISS_DELAY_MS: i32 = 5_000;

/// Duration of the opacity fade before removal, in milliseconds.
pub(crate) const FADE_MS: i32 = 300;

// ============================================================================
// Severity
// ============================================================================

/// Alert severity, carried as an `alert-*` class on the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation succeeded; auto-dismissed.
    Success,
    /// Informational; auto-dismissed.
    Info,
    /// Needs attention; stays until dismissed by the user.
    Warning,
    /// Something failed; stays until dismissed by the user.
    Danger,
}

impl Severity {
    /// The `alert-{suffix}` class carrying this severity.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Read the severity off an alert element's class list.
    pub fn of_element(element: &Element) -> Option<Severity> {
        let classes = element.class_list();
        [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Danger,
        ]
        .into_iter()
        .find(|severity| classes.contains(&format!("alert-{}", severity.class_suffix())))
    }

    /// Whether alerts of this severity are removed automatically.
    pub fn auto_dismisses(self) -> bool {
        matches!(self, Severity::Success | Severity::Info)
    }
}

// ============================================================================
// Auto-dismiss
// ============================================================================

/// A pending auto-dismiss sweep. Dropping the handle before the delay fires
/// cancels the sweep; fades already in flight are left to finish.
pub(crate) struct ScheduledDismissal {
    window: Window,
    timer_id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for ScheduledDismissal {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.timer_id);
    }
}

/// Schedule the auto-dismiss sweep over every `.alert` in `document`.
///
/// Alerts are collected when the timer fires, not when it is scheduled, so
/// alerts added within the delay window are swept too.
pub(crate) fn schedule_auto_dismiss(
    window: &Window,
    document: &Document,
) -> Result<ScheduledDismissal, JsValue> {
    let sweep_document = document.clone();
    let sweep_window = window.clone();
    let callback = Closure::wrap(Box::new(move || {
        sweep_alerts(&sweep_window, &sweep_document);
    }) as Box<dyn FnMut()>);

    let timer_id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        DISMISS_DELAY_MS,
    )?;

    Ok(ScheduledDismissal {
        window: window.clone(),
        timer_id,
        _callback: callback,
    })
}

fn sweep_alerts(window: &Window, document: &Document) {
    let Ok(alerts) = document.query_selector_all(".alert") else {
        return;
    };

    let mut dismissed = 0;
    for index in 0..alerts.length() {
        let Some(element) = alerts
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };

        let auto = Severity::of_element(&element).is_some_and(Severity::auto_dismisses);
        if !auto {
            continue;
        }

        fade_and_remove(window, element);
        dismissed += 1;
    }

    if dismissed > 0 {
        log::debug!("auto-dismissed {dismissed} alert(s)");
    }
}

fn fade_and_remove(window: &Window, element: web_sys::HtmlElement) {
    let style = element.style();
    style
        .set_property("transition", &format!("opacity {FADE_MS}ms"))
        .ok();
    style.set_property("opacity", "0").ok();

    // The removal timer is one-shot and deliberately not cancellable; once
    // the fade has started the alert is as good as gone.
    let remove = Closure::once_into_js(move || {
        element.remove();
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(remove.unchecked_ref(), FADE_MS)
        .ok();
}

// ============================================================================
// Notices
// ============================================================================

/// Insert a non-blocking notice alert at the top of the document body.
///
/// This is the user-visible channel for failures that were previously only
/// logged (image preview, geolocation). The inserted element carries the
/// standard alert classes, so a success or info notice shown before the
/// auto-dismiss sweep fires is swept like any other alert.
pub fn show_notice(document: &Document, severity: Severity, message: &str) -> Result<(), JsValue> {
    let notice = document.create_element("div")?;
    notice.set_class_name(&format!("alert alert-{}", severity.class_suffix()));
    notice.set_attribute("role", "alert")?;
    notice.set_text_content(Some(message));

    let body = document.body().js_ok_or("document has no body")?;
    body.prepend_with_node_1(&notice)?;
    Ok(())
}
