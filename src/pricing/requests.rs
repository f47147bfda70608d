//! Request DTOs for pricing API endpoints.
//!
//! Reservation window fields are modeled as options so an omitted field
//! maps to the calculator's missing-field error rather than a serde
//! rejection.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Request to price a reservation
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub vehicle_type_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Whether the reservation falls in the peak window
    #[serde(default)]
    pub peak: bool,
    /// Selected add-on service ids
    #[serde(default)]
    pub services: Vec<String>,
    /// Raw discount code; validated and resolved during the quote
    #[serde(default)]
    pub discount_code: Option<String>,
}

/// Request to validate a discount code
#[derive(Debug, Deserialize)]
pub struct DiscountRequest {
    #[serde(default)]
    pub code: String,
}
