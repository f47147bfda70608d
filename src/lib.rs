//! Park & Ride reservation service.
//!
//! HTTP/JSON backend for the parking-reservation site: rate catalog,
//! price quotes, discount validation, the demand schedule, a mock
//! auth/session layer, booking confirmation, and the shuttle status
//! board.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use auth::AuthService;
use cache::AppCache;
use config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub auth: Arc<AuthService>,
    pub config: Arc<Config>,
}

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api/pricing", pricing::router())
        .nest("/api/auth", auth::router())
        .route("/api/locations", get(routes::booking::locations))
        .route("/api/bookings", post(routes::booking::create))
        .route("/api/shuttles", get(routes::shuttle::list))
        .route("/api/shuttles/:id", get(routes::shuttle::detail))
        .fallback(|| async { error::AppError::NotFound })
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
