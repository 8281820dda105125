//! Booking price arithmetic.
//!
//! A booking is priced from a [`RateCard`] and the whole-day span between the
//! check-in and check-out dates. Daily bookings charge per day; monthly
//! bookings charge fractional months of 30 days (not calendar-aware). Every
//! quote adds the card's flat security deposit on top.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days per month used for fractional-month pricing.
///
/// Monthly totals are pro-rated over a fixed 30-day month rather than the
/// calendar months the stay actually spans.
pub const DAYS_PER_MONTH: f64 = 30.0;

// ============================================================================
// Types
// ============================================================================

/// Pricing mode selected on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    /// Charged per day of the stay.
    Daily,
    /// Charged per fractional 30-day month of the stay.
    Monthly,
}

impl BookingType {
    /// The form value this booking type serializes to.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingType::Daily => "daily",
            BookingType::Monthly => "monthly",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingType {
    type Err = PriceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "daily" => Ok(BookingType::Daily),
            "monthly" => Ok(BookingType::Monthly),
            other => Err(PriceError::UnknownBookingType(other.to_string())),
        }
    }
}

/// Rates a property is offered at, fixed when the booking form is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Price per day for daily bookings.
    pub daily_rate: f64,
    /// Price per 30-day month for monthly bookings.
    pub monthly_rate: f64,
    /// Flat deposit added to every quote.
    pub security_deposit: f64,
}

impl RateCard {
    /// Create a rate card from the three form-level constants.
    pub fn new(daily_rate: f64, monthly_rate: f64, security_deposit: f64) -> Self {
        Self {
            daily_rate,
            monthly_rate,
            security_deposit,
        }
    }
}

/// A priced stay, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    /// Whole days between check-in and check-out.
    pub days: i64,
    /// Rate charge before the deposit.
    pub base: f64,
    /// Flat security deposit from the rate card.
    pub deposit: f64,
    /// `base + deposit`.
    pub total: f64,
}

/// Why a quote could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// Check-out is on or before check-in.
    #[error("check-out must fall after check-in (span of {0} days)")]
    EmptySpan(i64),
    /// The booking-type field held a value other than "daily" or "monthly".
    #[error("unknown booking type '{0}'")]
    UnknownBookingType(String),
}

// ============================================================================
// Operations
// ============================================================================

/// Whole-day span between two dates. Negative when `check_out` precedes
/// `check_in`.
pub fn stay_days(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Price a stay of `days` whole days under `booking_type`.
///
/// Returns [`PriceError::EmptySpan`] for a non-positive span; callers that
/// render a running total should leave their previous display untouched in
/// that case.
pub fn quote(card: &RateCard, booking_type: BookingType, days: i64) -> Result<Quote, PriceError> {
    if days <= 0 {
        return Err(PriceError::EmptySpan(days));
    }

    let base = match booking_type {
        BookingType::Daily => days as f64 * card.daily_rate,
        BookingType::Monthly => (days as f64 / DAYS_PER_MONTH) * card.monthly_rate,
    };

    let total = base + card.security_deposit;
    log::trace!("quoted {booking_type} stay of {days} day(s): base {base}, total {total}");

    Ok(Quote {
        days,
        base,
        deposit: card.security_deposit,
        total,
    })
}

/// Convenience wrapper pricing a stay directly from its dates.
pub fn quote_for_dates(
    card: &RateCard,
    booking_type: BookingType,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Quote, PriceError> {
    quote(card, booking_type, stay_days(check_in, check_out))
}
