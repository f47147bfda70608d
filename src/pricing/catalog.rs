//! Static rate tables.
//!
//! Locations, vehicle types, add-on services, and discount codes are
//! fixed at compile time. Lookups return references into the tables;
//! nothing here touches I/O.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Parking location with its hourly base rate and peak-hour multiplier
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub peak_multiplier: Decimal,
}

/// Vehicle class with its rate multiplier
#[derive(Debug, Clone, Serialize)]
pub struct VehicleType {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate_multiplier: Decimal,
}

/// Optional flat-fee add-on, selectable independent of location and vehicle
#[derive(Debug, Clone, Serialize)]
pub struct AdditionalService {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub description: &'static str,
}

pub static LOCATIONS: [Location; 5] = [
    Location {
        id: "downtown",
        name: "Downtown Station",
        base_rate: dec!(12),
        peak_multiplier: dec!(1.5),
    },
    Location {
        id: "northside",
        name: "Northside Transit Center",
        base_rate: dec!(10),
        peak_multiplier: dec!(1.3),
    },
    Location {
        id: "eastgate",
        name: "Eastgate Park & Ride",
        base_rate: dec!(8),
        peak_multiplier: dec!(1.2),
    },
    Location {
        id: "westend",
        name: "West End Terminal",
        base_rate: dec!(15),
        peak_multiplier: dec!(1.8),
    },
    Location {
        id: "southbay",
        name: "Southbay Station",
        base_rate: dec!(9),
        peak_multiplier: dec!(1.4),
    },
];

pub static VEHICLE_TYPES: [VehicleType; 5] = [
    VehicleType {
        id: "compact",
        name: "Compact Car",
        rate_multiplier: dec!(1.0),
    },
    VehicleType {
        id: "midsize",
        name: "Midsize Car",
        rate_multiplier: dec!(1.1),
    },
    VehicleType {
        id: "suv",
        name: "SUV / Crossover",
        rate_multiplier: dec!(1.2),
    },
    VehicleType {
        id: "truck",
        name: "Pickup Truck",
        rate_multiplier: dec!(1.3),
    },
    VehicleType {
        id: "oversized",
        name: "Oversized Vehicle",
        rate_multiplier: dec!(1.5),
    },
];

pub static SERVICES: [AdditionalService; 5] = [
    AdditionalService {
        id: "express",
        name: "Express Shuttle",
        price: dec!(5),
        description: "Priority boarding on shuttle services with direct routes",
    },
    AdditionalService {
        id: "valet",
        name: "Valet Parking",
        price: dec!(10),
        description: "Drop off your vehicle and let our team park it for you",
    },
    AdditionalService {
        id: "charging",
        name: "EV Charging",
        price: dec!(8),
        description: "Electric vehicle charging while you're away",
    },
    AdditionalService {
        id: "wash",
        name: "Car Wash",
        price: dec!(15),
        description: "Your car will be washed and ready when you return",
    },
    AdditionalService {
        id: "covered",
        name: "Covered Parking",
        price: dec!(7),
        description: "Park in our covered garage spaces",
    },
];

/// Discount code table: normalized (upper-cased) code to percent off
const DISCOUNT_CODES: [(&str, u32); 3] = [("NEWUSER", 15), ("WEEKEND", 10), ("SUMMER23", 20)];

pub fn locations() -> &'static [Location] {
    &LOCATIONS
}

pub fn vehicle_types() -> &'static [VehicleType] {
    &VEHICLE_TYPES
}

pub fn services() -> &'static [AdditionalService] {
    &SERVICES
}

/// Look up a location by id
pub fn location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|loc| loc.id == id)
}

/// Look up a vehicle type by id
pub fn vehicle_type(id: &str) -> Option<&'static VehicleType> {
    VEHICLE_TYPES.iter().find(|veh| veh.id == id)
}

/// Look up an additional service by id
pub fn service(id: &str) -> Option<&'static AdditionalService> {
    SERVICES.iter().find(|svc| svc.id == id)
}

/// Exact-match lookup of an already-normalized discount code
pub fn discount_percent(code: &str) -> Option<u32> {
    DISCOUNT_CODES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, percent)| *percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_location_ids_are_unique() {
        let ids: HashSet<_> = LOCATIONS.iter().map(|loc| loc.id).collect();
        assert_eq!(ids.len(), LOCATIONS.len());
    }

    #[test]
    fn test_vehicle_type_ids_are_unique() {
        let ids: HashSet<_> = VEHICLE_TYPES.iter().map(|veh| veh.id).collect();
        assert_eq!(ids.len(), VEHICLE_TYPES.len());
    }

    #[test]
    fn test_service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|svc| svc.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn test_rates_and_multipliers_are_positive() {
        for loc in &LOCATIONS {
            assert!(loc.base_rate > Decimal::ZERO, "{}", loc.id);
            assert!(loc.peak_multiplier > Decimal::ZERO, "{}", loc.id);
        }
        for veh in &VEHICLE_TYPES {
            assert!(veh.rate_multiplier > Decimal::ZERO, "{}", veh.id);
        }
        for svc in &SERVICES {
            assert!(svc.price > Decimal::ZERO, "{}", svc.id);
        }
    }

    #[test]
    fn test_discount_percents_within_bounds() {
        for (code, percent) in DISCOUNT_CODES {
            assert!(percent <= 100, "{}", code);
        }
    }

    #[test]
    fn test_lookups_find_known_ids() {
        assert_eq!(location("downtown").unwrap().name, "Downtown Station");
        assert_eq!(vehicle_type("suv").unwrap().rate_multiplier, dec!(1.2));
        assert_eq!(service("valet").unwrap().price, dec!(10));
        assert_eq!(discount_percent("SUMMER23"), Some(20));
    }

    #[test]
    fn test_lookups_miss_unknown_ids() {
        assert!(location("orbit").is_none());
        assert!(vehicle_type("hovercraft").is_none());
        assert!(service("detailing").is_none());
        assert_eq!(discount_percent("BOGUS"), None);
    }

    #[test]
    fn test_discount_lookup_is_case_sensitive_on_normalized_codes() {
        // Normalization happens in the calculator; the table itself only
        // holds upper-cased codes.
        assert_eq!(discount_percent("newuser"), None);
        assert_eq!(discount_percent("NEWUSER"), Some(15));
    }
}
