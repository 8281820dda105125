//! Live booking-price display.
//!
//! [`PriceCalculator::install`] wires change listeners onto the booking
//! form's type selector and date fields and renders a running total into the
//! page's total-amount element. The arithmetic lives in `staybook_core`;
//! this module only moves values between the DOM and the core.
//!
//! The rendered figure is a display convenience. The server prices the
//! actual booking.

use std::rc::Rc;

use chrono::NaiveDate;
use staybook_core::{display_amount, quote, stay_days, BookingType, PriceError, RateCard};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::listener::EventHook;

/// Element ids the booking form renders with.
const BOOKING_TYPE_ID: &str = "id_booking_type";
const CHECK_IN_ID: &str = "id_check_in_date";
const CHECK_OUT_ID: &str = "id_check_out_date";
const TOTAL_AMOUNT_ID: &str = "total-amount";

/// Format produced by `<input type="date">` values.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// PriceCalculator
// ============================================================================

/// Handle over the installed price-calculator listeners.
#[wasm_bindgen]
pub struct PriceCalculator {
    hooks: Vec<EventHook>,
}

#[wasm_bindgen]
impl PriceCalculator {
    /// Wire the live total onto `document` for the given rates.
    ///
    /// A no-op (returning an empty handle) when the booking form fields are
    /// not on the page; the total element alone being absent still wires the
    /// listeners and skips rendering.
    pub fn install(
        document: &Document,
        daily_rate: f64,
        monthly_rate: f64,
        security_deposit: f64,
    ) -> Result<PriceCalculator, JsValue> {
        let card = RateCard::new(daily_rate, monthly_rate, security_deposit);
        Self::install_with_card(document, card)
    }

    /// Detach the change listeners.
    pub fn dispose(self) {}
}

impl PriceCalculator {
    /// Typed-Rust form of [`PriceCalculator::install`].
    pub fn install_with_card(
        document: &Document,
        card: RateCard,
    ) -> Result<PriceCalculator, JsValue> {
        let Some(fields) = BookingFields::find(document) else {
            log::debug!("booking form fields not present; price calculator not installed");
            return Ok(PriceCalculator { hooks: Vec::new() });
        };

        let update = Rc::new(move || fields.render_total(&card));

        let mut hooks = Vec::new();
        for id in [BOOKING_TYPE_ID, CHECK_IN_ID, CHECK_OUT_ID] {
            // Present by construction: BookingFields::find resolved all three.
            let element = document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("booking field '{id}' disappeared")))?;
            let update = update.clone();
            hooks.push(EventHook::attach(&element, "change", move |_event: Event| {
                update();
            })?);
        }

        Ok(PriceCalculator { hooks })
    }

    /// Number of live change listeners (empty when the form was absent).
    pub fn listener_count(&self) -> usize {
        self.hooks.len()
    }
}

// ============================================================================
// Booking form fields
// ============================================================================

struct BookingFields {
    booking_type: Element,
    check_in: Element,
    check_out: Element,
    total: Option<Element>,
}

impl BookingFields {
    /// Resolve the booking form's elements. `None` unless all three input
    /// fields exist; the total element stays optional, as on pages that
    /// render the form without a live total.
    fn find(document: &Document) -> Option<Self> {
        Some(Self {
            booking_type: document.get_element_by_id(BOOKING_TYPE_ID)?,
            check_in: document.get_element_by_id(CHECK_IN_ID)?,
            check_out: document.get_element_by_id(CHECK_OUT_ID)?,
            total: document.get_element_by_id(TOTAL_AMOUNT_ID),
        })
    }

    /// Recompute and render the total, holding the previous display on any
    /// incomplete or invalid input.
    fn render_total(&self, card: &RateCard) {
        let Some(total) = &self.total else {
            return;
        };

        let (Some(check_in), Some(check_out)) =
            (parse_date_field(&self.check_in), parse_date_field(&self.check_out))
        else {
            return;
        };

        let type_value = field_value(&self.booking_type).unwrap_or_default();
        let booking_type: BookingType = match type_value.parse() {
            Ok(parsed) => parsed,
            Err(PriceError::UnknownBookingType(other)) => {
                // Explicitly hold the previous total instead of silently
                // quoting a deposit-only figure for a value the form should
                // never produce.
                log::warn!("booking type '{other}' not recognized; total display unchanged");
                return;
            }
            Err(_) => return,
        };

        match quote(card, booking_type, stay_days(check_in, check_out)) {
            Ok(q) => total.set_text_content(Some(&display_amount(q.total))),
            Err(PriceError::EmptySpan(days)) => {
                log::debug!("no total rendered for a {days}-day span");
            }
            Err(err) => log::warn!("price calculation failed: {err}"),
        }
    }
}

/// Read a form field's current value, whether it is a select or an input.
fn field_value(element: &Element) -> Option<String> {
    if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

fn parse_date_field(element: &Element) -> Option<NaiveDate> {
    let value = field_value(element)?;
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(&value, DATE_INPUT_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("unparseable date input '{value}': {err}");
            None
        }
    }
}
