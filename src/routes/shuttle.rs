//! Shuttle status route handlers.
//!
//! A static status board; there is no live telemetry behind it.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::error::{AppError, Result};

/// Point-in-time status of one shuttle
#[derive(Debug, Serialize)]
pub struct ShuttleStatus {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub heading: &'static str,
    pub next_stop_minutes: u32,
    pub capacity_percent: u32,
}

static SHUTTLES: [ShuttleStatus; 4] = [
    ShuttleStatus {
        id: 1,
        name: "Shuttle A",
        location: "Downtown Station",
        heading: "North Terminal",
        next_stop_minutes: 5,
        capacity_percent: 70,
    },
    ShuttleStatus {
        id: 2,
        name: "Shuttle B",
        location: "Airport Terminal",
        heading: "South Plaza",
        next_stop_minutes: 3,
        capacity_percent: 85,
    },
    ShuttleStatus {
        id: 3,
        name: "Shuttle C",
        location: "North Station",
        heading: "Downtown",
        next_stop_minutes: 10,
        capacity_percent: 45,
    },
    ShuttleStatus {
        id: 4,
        name: "Shuttle D",
        location: "West Hub",
        heading: "East Plaza",
        next_stop_minutes: 7,
        capacity_percent: 60,
    },
];

/// All active shuttles
pub async fn list() -> Json<&'static [ShuttleStatus]> {
    Json(SHUTTLES.as_slice())
}

/// A single shuttle by id
pub async fn detail(Path(id): Path<u32>) -> Result<Json<&'static ShuttleStatus>> {
    SHUTTLES
        .iter()
        .find(|shuttle| shuttle.id == id)
        .map(Json)
        .ok_or(AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::test_util::test_app;

    #[tokio::test]
    async fn test_list_shuttles() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/shuttles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let shuttles = body.as_array().unwrap();
        assert_eq!(shuttles.len(), 4);
        assert_eq!(shuttles[1]["name"], "Shuttle B");
        assert_eq!(shuttles[1]["capacity_percent"], 85);
    }

    #[tokio::test]
    async fn test_shuttle_detail() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/shuttles/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["heading"], "Downtown");
        assert_eq!(body["next_stop_minutes"], 10);
    }

    #[tokio::test]
    async fn test_unknown_shuttle_is_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/shuttles/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
