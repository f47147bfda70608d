//! Pricing engine module for the Park & Ride service.
//!
//! Derives elapsed hours from a reservation window, composes the final
//! price from the static rate tables, and exposes the result as an
//! itemized breakdown over HTTP/JSON.

pub mod calculators;
pub mod catalog;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod schedule;

// Re-export commonly used items
pub use calculators::{round_money, PricingError};
pub use routes::router;
