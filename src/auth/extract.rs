//! Bearer-token session extractor.
//!
//! Guarded handlers take a `CurrentSession` argument; extraction checks
//! the cache first and falls back to the auth service, caching hits for
//! subsequent requests.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;

use crate::error::AppError;
use crate::AppState;

use super::service::AuthError;
use super::Session;

/// The session resolved from the request's bearer token
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        // Try cache first
        if let Some(cached) = state.cache.sessions.get(token).await {
            if cached.is_valid_at(Utc::now()) {
                tracing::debug!("Cache HIT for session token");
                return Ok(CurrentSession((*cached).clone()));
            }
            state.cache.sessions.invalidate(token).await;
        }

        tracing::debug!("Cache MISS for session token");
        let session = state
            .auth
            .session(token)
            .await
            .ok_or(AuthError::InvalidToken)?;

        state
            .cache
            .sessions
            .insert(token.to_string(), Arc::new(session.clone()))
            .await;

        Ok(CurrentSession(session))
    }
}
