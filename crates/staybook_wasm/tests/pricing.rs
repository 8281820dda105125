#![cfg(target_arch = "wasm32")]

use staybook_wasm::PriceCalculator;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_ROOT_ID: &str = "pricing-test-root";

fn document() -> Document {
    web_sys::window()
        .expect("window should exist")
        .document()
        .expect("document should exist")
}

/// Build the booking form the calculator expects, replacing any earlier copy.
fn booking_form(doc: &Document) -> Element {
    if let Some(stale) = doc.get_element_by_id(TEST_ROOT_ID) {
        stale.remove();
    }
    let root = doc.create_element("div").expect("container should be created");
    root.set_id(TEST_ROOT_ID);
    root.set_inner_html(concat!(
        r#"<select id="id_booking_type">"#,
        r#"<option value="daily">Daily</option>"#,
        r#"<option value="monthly">Monthly</option>"#,
        r#"<option value="weekly">Weekly</option>"#,
        r#"</select>"#,
        r#"<input type="date" id="id_check_in_date">"#,
        r#"<input type="date" id="id_check_out_date">"#,
        r#"<span id="total-amount"></span>"#,
    ));
    doc.body()
        .expect("body should exist")
        .append_child(&root)
        .expect("container should attach");
    root
}

fn set_field(doc: &Document, id: &str, value: &str) {
    let element = doc.get_element_by_id(id).expect("field should exist");
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else {
        element.unchecked_ref::<HtmlInputElement>().set_value(value);
    }
}

fn fire_change(doc: &Document, id: &str) {
    doc.get_element_by_id(id)
        .expect("field should exist")
        .dispatch_event(&Event::new("change").expect("event should be created"))
        .expect("dispatch should succeed");
}

fn total_text(doc: &Document) -> String {
    doc.get_element_by_id("total-amount")
        .expect("total element should exist")
        .text_content()
        .unwrap_or_default()
}

fn install(doc: &Document) -> PriceCalculator {
    PriceCalculator::install(doc, 1000.0, 9000.0, 500.0).expect("install should succeed")
}

// ── quoting ──────────────────────────────────────────────────────────────

#[wasm_bindgen_test]
fn daily_three_day_stay_renders_total() {
    let doc = document();
    let root = booking_form(&doc);
    let calc = install(&doc);
    assert_eq!(calc.listener_count(), 3);

    set_field(&doc, "id_booking_type", "daily");
    set_field(&doc, "id_check_in_date", "2024-01-01");
    set_field(&doc, "id_check_out_date", "2024-01-04");
    fire_change(&doc, "id_check_out_date");

    assert_eq!(total_text(&doc), "₹3500.00");

    calc.dispose();
    root.remove();
}

#[wasm_bindgen_test]
fn monthly_booking_uses_fractional_months() {
    let doc = document();
    let root = booking_form(&doc);
    let calc = install(&doc);

    set_field(&doc, "id_booking_type", "monthly");
    set_field(&doc, "id_check_in_date", "2024-01-01");
    set_field(&doc, "id_check_out_date", "2024-01-04");
    fire_change(&doc, "id_booking_type");

    // 0.1 month of 9000 plus the 500 deposit.
    assert_eq!(total_text(&doc), "₹1400.00");

    calc.dispose();
    root.remove();
}

// ── held displays ────────────────────────────────────────────────────────

#[wasm_bindgen_test]
fn reversed_dates_leave_previous_total_in_place() {
    let doc = document();
    let root = booking_form(&doc);
    let calc = install(&doc);

    set_field(&doc, "id_booking_type", "daily");
    set_field(&doc, "id_check_in_date", "2024-01-01");
    set_field(&doc, "id_check_out_date", "2024-01-04");
    fire_change(&doc, "id_check_out_date");
    assert_eq!(total_text(&doc), "₹3500.00");

    set_field(&doc, "id_check_out_date", "2023-12-31");
    fire_change(&doc, "id_check_out_date");
    assert_eq!(total_text(&doc), "₹3500.00", "display should hold its value");

    calc.dispose();
    root.remove();
}

#[wasm_bindgen_test]
fn unknown_booking_type_leaves_total_unchanged() {
    let doc = document();
    let root = booking_form(&doc);
    let calc = install(&doc);

    set_field(&doc, "id_booking_type", "daily");
    set_field(&doc, "id_check_in_date", "2024-01-01");
    set_field(&doc, "id_check_out_date", "2024-01-04");
    fire_change(&doc, "id_check_out_date");
    assert_eq!(total_text(&doc), "₹3500.00");

    set_field(&doc, "id_booking_type", "weekly");
    fire_change(&doc, "id_booking_type");
    assert_eq!(total_text(&doc), "₹3500.00", "unknown type must not re-quote");

    calc.dispose();
    root.remove();
}

#[wasm_bindgen_test]
fn missing_date_renders_nothing() {
    let doc = document();
    let root = booking_form(&doc);
    let calc = install(&doc);

    set_field(&doc, "id_booking_type", "daily");
    set_field(&doc, "id_check_in_date", "2024-01-01");
    fire_change(&doc, "id_check_in_date");

    assert_eq!(total_text(&doc), "");

    calc.dispose();
    root.remove();
}

// ── installation edge cases ──────────────────────────────────────────────

#[wasm_bindgen_test]
fn install_without_form_is_a_quiet_no_op() {
    let doc = document();
    if let Some(stale) = doc.get_element_by_id(TEST_ROOT_ID) {
        stale.remove();
    }

    let calc = install(&doc);
    assert_eq!(calc.listener_count(), 0);
    calc.dispose();
}

#[wasm_bindgen_test]
fn disposed_calculator_stops_updating() {
    let doc = document();
    let root = booking_form(&doc);
    let calc = install(&doc);
    calc.dispose();

    set_field(&doc, "id_booking_type", "daily");
    set_field(&doc, "id_check_in_date", "2024-01-01");
    set_field(&doc, "id_check_out_date", "2024-01-04");
    fire_change(&doc, "id_check_out_date");

    assert_eq!(total_text(&doc), "", "no listener should remain after dispose");
    root.remove();
}
