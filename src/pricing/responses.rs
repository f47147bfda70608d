//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{display_money, Quote};
use super::catalog::{AdditionalService, Location, VehicleType};
use super::schedule::{Demand, HourlyRate};

/// One line of the rendered breakdown, rounded for display
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownLine {
    pub label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Itemized price breakdown for a reservation
#[derive(Debug, Serialize)]
pub struct PriceBreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
    pub lines: Vec<BreakdownLine>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl PriceBreakdownResponse {
    /// Render a quote for display: every emitted amount is rounded to
    /// exactly two fractional digits here and nowhere earlier.
    pub fn from_quote(hours: Decimal, quote: &Quote) -> Self {
        let lines = quote
            .line_items()
            .into_iter()
            .map(|line| BreakdownLine {
                label: line.label,
                amount: display_money(line.amount),
            })
            .collect();

        Self {
            hours: display_money(hours),
            lines,
            total: display_money(quote.total),
        }
    }
}

/// Response for a validated discount code
#[derive(Debug, Serialize)]
pub struct DiscountResponse {
    pub code: String,
    pub percent: u32,
}

/// The static rate tables, minus the discount code table
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub locations: &'static [Location],
    pub vehicle_types: &'static [VehicleType],
    pub services: &'static [AdditionalService],
}

/// One day of the posted rate schedule
#[derive(Debug, Serialize)]
pub struct DayScheduleResponse {
    pub day: &'static str,
    pub rates: &'static [HourlyRate],
}

/// Posted rate and surge status for a point in time
#[derive(Debug, Serialize)]
pub struct CurrentRateResponse {
    pub day: &'static str,
    pub hour: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "rust_decimal::serde::str_option")]
    pub rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<Demand>,
    pub peak: bool,
    pub surge: bool,
}
