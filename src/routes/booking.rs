//! Booking route handlers.
//!
//! Bookings are validated and priced through the pricing pipeline and
//! returned with a confirmation reference. Nothing is stored; the
//! service holds no booking inventory.

use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::{CurrentSession, User};
use crate::error::Result;
use crate::pricing::catalog;
use crate::pricing::requests::QuoteRequest;
use crate::pricing::responses::PriceBreakdownResponse;
use crate::pricing::routes::quote_breakdown;

/// Sample open-spot counts per location
const AVAILABLE_SPOTS: [(&str, u32); 5] = [
    ("downtown", 23),
    ("northside", 17),
    ("eastgate", 8),
    ("westend", 42),
    ("southbay", 15),
];

/// A location with its current availability
#[derive(Debug, Serialize)]
pub struct LocationAvailability {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub hourly_rate: Decimal,
    pub available_spots: u32,
}

/// Confirmation for a priced booking
#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub user: User,
    pub location_id: String,
    pub location_name: &'static str,
    pub vehicle_type_id: String,
    pub breakdown: PriceBreakdownResponse,
}

/// Locations with availability, for the booking form
pub async fn locations() -> Json<Vec<LocationAvailability>> {
    let entries = catalog::locations()
        .iter()
        .map(|loc| {
            let available_spots = AVAILABLE_SPOTS
                .iter()
                .find(|(id, _)| *id == loc.id)
                .map(|(_, spots)| *spots)
                .unwrap_or(0);
            LocationAvailability {
                id: loc.id,
                name: loc.name,
                hourly_rate: loc.base_rate,
                available_spots,
            }
        })
        .collect();

    Json(entries)
}

/// Price a reservation and confirm it
pub async fn create(
    CurrentSession(session): CurrentSession,
    Json(req): Json<QuoteRequest>,
) -> Result<(StatusCode, Json<BookingConfirmation>)> {
    let breakdown = quote_breakdown(&req)?;

    // quote_breakdown has already resolved both ids
    let location_id = req.location_id.clone().unwrap_or_default();
    let location_name = catalog::location(&location_id).map(|loc| loc.name).unwrap_or("");
    let vehicle_type_id = req.vehicle_type_id.clone().unwrap_or_default();

    let confirmation = BookingConfirmation {
        reference: Uuid::new_v4(),
        user: session.user,
        location_id,
        location_name,
        vehicle_type_id,
        breakdown,
    };

    tracing::info!(
        "Booking {} confirmed for {} at {}",
        confirmation.reference,
        confirmation.user.email,
        confirmation.location_name
    );

    Ok((StatusCode::CREATED, Json(confirmation)))
}
