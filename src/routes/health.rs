//! Health and monitoring endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache: CacheStats,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cache: state.cache.stats(),
    })
}
