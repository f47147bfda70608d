//! Pricing route handlers

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Local, Timelike};

use crate::error::Result;
use crate::AppState;

use super::calculators::{compose_price, duration_hours, lookup_discount, PricingError};
use super::catalog;
use super::requests::{DiscountRequest, QuoteRequest};
use super::responses::{
    CatalogResponse, CurrentRateResponse, DayScheduleResponse, DiscountResponse,
    PriceBreakdownResponse,
};
use super::schedule;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/discount", post(validate_discount))
        .route("/catalog", get(catalog_tables))
        .route("/schedule", get(week_schedule))
        .route("/schedule/now", get(current_rate))
}

/// Price a reservation and return the itemized breakdown
pub async fn quote(Json(req): Json<QuoteRequest>) -> Result<Json<PriceBreakdownResponse>> {
    let breakdown = quote_breakdown(&req)?;
    Ok(Json(breakdown))
}

/// Shared quote pipeline, also used by the booking routes
pub fn quote_breakdown(req: &QuoteRequest) -> Result<PriceBreakdownResponse> {
    let location_id = req
        .location_id
        .as_deref()
        .ok_or(PricingError::MissingField("location_id"))?;
    let location = catalog::location(location_id)
        .ok_or_else(|| PricingError::UnknownLocation(location_id.to_string()))?;

    let vehicle_id = req
        .vehicle_type_id
        .as_deref()
        .ok_or(PricingError::MissingField("vehicle_type_id"))?;
    let vehicle = catalog::vehicle_type(vehicle_id)
        .ok_or_else(|| PricingError::UnknownVehicleType(vehicle_id.to_string()))?;

    let hours = duration_hours(req.start_date, req.start_time, req.end_date, req.end_time)?;

    let discount_percent = match req.discount_code.as_deref() {
        Some(code) => lookup_discount(code)?,
        None => 0,
    };

    let quote = compose_price(
        location,
        vehicle,
        hours,
        req.peak,
        &req.services,
        discount_percent,
    )?;

    Ok(PriceBreakdownResponse::from_quote(hours, &quote))
}

/// Validate a discount code against the static table
pub async fn validate_discount(
    Json(req): Json<DiscountRequest>,
) -> Result<Json<DiscountResponse>> {
    let percent = lookup_discount(&req.code)?;
    Ok(Json(DiscountResponse {
        code: req.code.trim().to_uppercase(),
        percent,
    }))
}

/// The static rate tables
pub async fn catalog_tables() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        locations: catalog::locations(),
        vehicle_types: catalog::vehicle_types(),
        services: catalog::services(),
    })
}

/// Posted hourly rates for the full week
pub async fn week_schedule() -> Json<Vec<DayScheduleResponse>> {
    use chrono::Weekday::*;

    let days = [Mon, Tue, Wed, Thu, Fri, Sat, Sun]
        .into_iter()
        .map(|day| DayScheduleResponse {
            day: schedule::weekday_name(day),
            rates: schedule::day_schedule(day),
        })
        .collect();

    Json(days)
}

/// Current posted rate and surge status, in the server's local frame
pub async fn current_rate() -> Json<CurrentRateResponse> {
    let now = Local::now();
    let day = now.weekday();
    let hour = now.hour();
    let posted = schedule::rate_at(day, hour);

    Json(CurrentRateResponse {
        day: schedule::weekday_name(day),
        hour,
        rate: posted.map(|r| r.rate),
        demand: posted.map(|r| r.demand),
        peak: schedule::is_peak_hour(hour),
        surge: schedule::is_surge(day, hour),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_util::test_app;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn base_quote() -> Value {
        json!({
            "location_id": "northside",
            "vehicle_type_id": "suv",
            "start_date": "2025-03-10",
            "start_time": "09:00:00",
            "end_date": "2025-03-10",
            "end_time": "13:00:00",
        })
    }

    #[tokio::test]
    async fn test_quote_base_case() {
        let (status, body) = post_json("/api/pricing/quote", base_quote()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], "48.00");
        assert_eq!(body["hours"], "4.00");
        assert_eq!(body["lines"][0]["label"], "Base Parking Fee");
        assert_eq!(body["lines"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_quote_with_services_and_discount() {
        let mut req = base_quote();
        req["peak"] = json!(true);
        req["services"] = json!(["express"]);
        req["discount_code"] = json!("summer23");

        let (status, body) = post_json("/api/pricing/quote", req).await;
        assert_eq!(status, StatusCode::OK);
        // northside: base 48, peak surcharge 14.40, services 5,
        // discount 13.48, total 53.92
        assert_eq!(body["total"], "53.92");
        assert_eq!(body["lines"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_quote_equal_timestamps_rejected() {
        let mut req = base_quote();
        req["end_time"] = json!("09:00:00");

        let (status, body) = post_json("/api/pricing/quote", req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "invalid_time_range");
        assert_eq!(body["message"], "End time must be after start time");
    }

    #[tokio::test]
    async fn test_quote_missing_window_field() {
        let mut req = base_quote();
        req.as_object_mut().unwrap().remove("end_date");

        let (status, body) = post_json("/api/pricing/quote", req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "missing_field");
        assert_eq!(body["details"]["field"], "end_date");
    }

    #[tokio::test]
    async fn test_quote_unknown_location() {
        let mut req = base_quote();
        req["location_id"] = json!("atlantis");

        let (status, body) = post_json("/api/pricing/quote", req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "unknown_location");
    }

    #[tokio::test]
    async fn test_discount_validation() {
        let (status, body) =
            post_json("/api/pricing/discount", json!({"code": "  newuser "})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "NEWUSER");
        assert_eq!(body["percent"], 15);
    }

    #[tokio::test]
    async fn test_discount_bogus_code() {
        let (status, body) = post_json("/api/pricing/discount", json!({"code": "BOGUS"})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "invalid_discount_code");
    }

    #[tokio::test]
    async fn test_discount_empty_code() {
        let (status, body) = post_json("/api/pricing/discount", json!({})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "missing_discount_code");
    }

    #[tokio::test]
    async fn test_catalog_excludes_discount_codes() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/pricing/catalog")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["locations"].as_array().unwrap().len(), 5);
        assert_eq!(body["vehicle_types"].as_array().unwrap().len(), 5);
        assert_eq!(body["services"].as_array().unwrap().len(), 5);
        assert!(body.get("discount_codes").is_none());
    }

    #[tokio::test]
    async fn test_week_schedule() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/pricing/schedule")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let days = body.as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["day"], "monday");
        assert_eq!(days[0]["rates"][1]["demand"], "high");
        assert_eq!(days[6]["rates"][0]["rate"], "2.00");
    }
}
