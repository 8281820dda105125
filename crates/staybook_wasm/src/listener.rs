//! Owned DOM event registrations.
//!
//! Every wiring function in this crate returns [`EventHook`]s instead of
//! leaking its closures. Dropping a hook removes the listener from its
//! target, which is what makes [`crate::PageEnhancements::dispose`] and
//! [`crate::PriceCalculator::dispose`] real teardown operations rather than
//! no-ops.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A DOM event listener that stays registered for as long as the hook lives.
pub(crate) struct EventHook {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventHook {
    /// Register `handler` for `event` on `target`.
    pub(crate) fn attach<T, F>(target: &T, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        T: AsRef<EventTarget>,
        F: FnMut(Event) + 'static,
    {
        let target = target.as_ref().clone();
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for EventHook {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            )
            .ok();
    }
}
