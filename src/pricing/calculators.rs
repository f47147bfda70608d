//! Core pricing calculation functions.
//!
//! Pure functions for duration and price math - no I/O. Amounts
//! accumulate at full `Decimal` precision; rounding to two places
//! happens only when a value is emitted for display.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog::{self, Location, VehicleType};

/// Validation errors surfaced to the user as inline messages.
///
/// All variants are recoverable input errors; none is retried
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Please select dates and times")]
    MissingField(&'static str),

    #[error("End time must be after start time")]
    InvalidTimeRange,

    #[error("Invalid discount code")]
    InvalidDiscountCode(String),

    #[error("Please enter a discount code")]
    MissingDiscountCode,

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),
}

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is
/// exactly halfway between two possibilities. This reduces cumulative
/// rounding bias.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Round for display and force exactly two fractional digits.
///
/// `round_money(dec!(48), 2)` keeps scale 0 and would render as "48";
/// rescaling pins the scale so serialized amounts always carry two
/// fractional digits.
pub fn display_money(amount: Decimal) -> Decimal {
    let mut rounded = round_money(amount, 2);
    rounded.rescale(2);
    rounded
}

/// Derive elapsed hours from a reservation window.
///
/// All four fields are required, and the end must be strictly after the
/// start. Both timestamps are interpreted in the same local frame; no
/// timezone normalization is applied.
pub fn duration_hours(
    start_date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_date: Option<NaiveDate>,
    end_time: Option<NaiveTime>,
) -> Result<Decimal, PricingError> {
    let start_date = start_date.ok_or(PricingError::MissingField("start_date"))?;
    let start_time = start_time.ok_or(PricingError::MissingField("start_time"))?;
    let end_date = end_date.ok_or(PricingError::MissingField("end_date"))?;
    let end_time = end_time.ok_or(PricingError::MissingField("end_time"))?;

    let start = NaiveDateTime::new(start_date, start_time);
    let end = NaiveDateTime::new(end_date, end_time);

    if end <= start {
        return Err(PricingError::InvalidTimeRange);
    }

    let seconds = (end - start).num_seconds();
    Ok(Decimal::from(seconds) / dec!(3600))
}

/// Normalize a discount code and resolve it against the static table.
///
/// Empty input (after trimming) and unknown codes are distinct error
/// conditions; resolution is idempotent, so re-applying the same code
/// never compounds the discount.
pub fn lookup_discount(raw: &str) -> Result<u32, PricingError> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() {
        return Err(PricingError::MissingDiscountCode);
    }
    catalog::discount_percent(&code).ok_or(PricingError::InvalidDiscountCode(code))
}

/// A composed price with its full-precision components
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub base: Decimal,
    pub peak_surcharge: Decimal,
    pub services_total: Decimal,
    pub subtotal: Decimal,
    pub discount_percent: u32,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

/// One line of the itemized breakdown; the discount line carries a
/// negative amount
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

impl Quote {
    /// Emit the ordered breakdown: base fee always, surcharge/services/
    /// discount only when non-zero, an unconditional "Total" line last.
    /// Amounts stay at full precision; display rounding is the caller's
    /// concern.
    pub fn line_items(&self) -> Vec<LineItem> {
        let mut lines = vec![LineItem {
            label: "Base Parking Fee".to_string(),
            amount: self.base,
        }];

        if self.peak_surcharge > Decimal::ZERO {
            lines.push(LineItem {
                label: "Peak Hour Surcharge".to_string(),
                amount: self.peak_surcharge,
            });
        }

        if self.services_total > Decimal::ZERO {
            lines.push(LineItem {
                label: "Additional Services".to_string(),
                amount: self.services_total,
            });
        }

        if self.discount_amount > Decimal::ZERO {
            lines.push(LineItem {
                label: format!("Discount ({}%)", self.discount_percent),
                amount: -self.discount_amount,
            });
        }

        lines.push(LineItem {
            label: "Total".to_string(),
            amount: self.total,
        });

        lines
    }
}

/// Compose the final price in fixed order:
///
/// 1. `base = location.base_rate * vehicle.rate_multiplier * hours`
/// 2. `peak_surcharge = peak ? base * (peak_multiplier - 1) : 0`
/// 3. `services_total` over the ids found in the service table; unknown
///    ids contribute nothing
/// 4. `subtotal = base + peak_surcharge + services_total`
/// 5. `discount_amount = subtotal * discount_percent / 100`
/// 6. `total = subtotal - discount_amount`
///
/// A non-positive duration aborts composition and surfaces the duration
/// validation failure instead of producing a breakdown.
pub fn compose_price(
    location: &Location,
    vehicle: &VehicleType,
    hours: Decimal,
    peak: bool,
    service_ids: &[String],
    discount_percent: u32,
) -> Result<Quote, PricingError> {
    if hours <= Decimal::ZERO {
        return Err(PricingError::InvalidTimeRange);
    }

    let base = location.base_rate * vehicle.rate_multiplier * hours;

    let peak_surcharge = if peak {
        base * (location.peak_multiplier - Decimal::ONE)
    } else {
        Decimal::ZERO
    };

    let services_total: Decimal = service_ids
        .iter()
        .filter_map(|id| catalog::service(id))
        .map(|svc| svc.price)
        .sum();

    let subtotal = base + peak_surcharge + services_total;
    let discount_amount = subtotal * Decimal::from(discount_percent) / dec!(100);
    let total = subtotal - discount_amount;

    Ok(Quote {
        base,
        peak_surcharge,
        services_total,
        subtotal,
        discount_percent,
        discount_amount,
        total,
    })
}
