//! Demand-based hourly rate schedule.
//!
//! Weekday and weekend hourly rates with demand tiers, used by the
//! schedule endpoints. Hours outside the published window have no
//! posted rate.

use chrono::Weekday;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Demand tier for an hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    Low,
    Medium,
    High,
}

/// Posted rate for a single hour
#[derive(Debug, Clone, Serialize)]
pub struct HourlyRate {
    pub hour: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    pub demand: Demand,
}

const fn hourly(hour: u32, rate: Decimal, demand: Demand) -> HourlyRate {
    HourlyRate { hour, rate, demand }
}

pub static WEEKDAY_RATES: [HourlyRate; 17] = [
    hourly(6, dec!(2.50), Demand::Medium),
    hourly(7, dec!(3.50), Demand::High),
    hourly(8, dec!(4.00), Demand::High),
    hourly(9, dec!(3.50), Demand::High),
    hourly(10, dec!(2.50), Demand::Medium),
    hourly(11, dec!(2.00), Demand::Low),
    hourly(12, dec!(2.00), Demand::Low),
    hourly(13, dec!(2.00), Demand::Low),
    hourly(14, dec!(2.00), Demand::Low),
    hourly(15, dec!(2.50), Demand::Medium),
    hourly(16, dec!(3.50), Demand::High),
    hourly(17, dec!(4.00), Demand::High),
    hourly(18, dec!(3.50), Demand::High),
    hourly(19, dec!(2.50), Demand::Medium),
    hourly(20, dec!(2.00), Demand::Low),
    hourly(21, dec!(1.50), Demand::Low),
    hourly(22, dec!(1.50), Demand::Low),
];

pub static WEEKEND_RATES: [HourlyRate; 13] = [
    hourly(8, dec!(2.00), Demand::Low),
    hourly(9, dec!(2.50), Demand::Medium),
    hourly(10, dec!(3.00), Demand::Medium),
    hourly(11, dec!(3.50), Demand::High),
    hourly(12, dec!(3.50), Demand::High),
    hourly(13, dec!(3.50), Demand::High),
    hourly(14, dec!(3.00), Demand::Medium),
    hourly(15, dec!(2.50), Demand::Medium),
    hourly(16, dec!(2.50), Demand::Medium),
    hourly(17, dec!(2.50), Demand::Medium),
    hourly(18, dec!(2.00), Demand::Low),
    hourly(19, dec!(2.00), Demand::Low),
    hourly(20, dec!(1.50), Demand::Low),
];

/// Hourly rates posted for the given day of the week
pub fn day_schedule(day: Weekday) -> &'static [HourlyRate] {
    match day {
        Weekday::Sat | Weekday::Sun => &WEEKEND_RATES,
        _ => &WEEKDAY_RATES,
    }
}

/// Posted rate at a given day and hour, if any
pub fn rate_at(day: Weekday, hour: u32) -> Option<&'static HourlyRate> {
    day_schedule(day).iter().find(|rate| rate.hour == hour)
}

/// Whether the hour falls in the peak window (7-9 AM or 4-6 PM)
pub fn is_peak_hour(hour: u32) -> bool {
    (7..9).contains(&hour) || (16..18).contains(&hour)
}

/// Whether demand is surging at the given day and hour
pub fn is_surge(day: Weekday, hour: u32) -> bool {
    rate_at(day, hour).is_some_and(|rate| rate.demand == Demand::High)
}

/// Lowercase display name for a day of the week
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
