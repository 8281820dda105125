//! # `staybook_core`
//!
//! Platform-neutral logic shared by the Staybook clients: the booking-price
//! arithmetic behind the live total display and the rupee formatting helpers.
//!
//! The browser client (`staybook_wasm`) wires this to DOM events; nothing in
//! this crate touches the DOM, so it compiles and tests on native targets.
//!
//! The price arithmetic here is a display convenience only. The server owns
//! the authoritative price of a booking.

#![warn(missing_docs)]

pub mod booking;
pub mod currency;

pub use booking::{quote, stay_days, BookingType, PriceError, Quote, RateCard};
pub use currency::{display_amount, format_inr};
