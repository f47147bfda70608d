//! Auth route handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::AppState;

use super::extract::CurrentSession;
use super::models::User;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/reset-password", post(reset_password))
        .route("/me", get(me))
}

/// Email/password credentials
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Email-only request (password reset)
#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: String,
}

/// An opened session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create an account and open a session
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let session = state.auth.sign_up(&req.email, &req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: session.token,
            user: session.user,
            expires_at: session.expires_at,
        }),
    ))
}

/// Authenticate and open a session
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>> {
    let session = state.auth.sign_in(&req.email, &req.password).await?;
    Ok(Json(SessionResponse {
        token: session.token,
        user: session.user,
        expires_at: session.expires_at,
    }))
}

/// Close the current session
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<MessageResponse>> {
    state.auth.sign_out(&session.token).await?;
    state.cache.invalidate_session(&session.token).await;
    Ok(Json(MessageResponse {
        message: "Signed out",
    }))
}

/// Mock password reset
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> Result<Json<MessageResponse>> {
    state.auth.reset_password(&req.email).await?;
    Ok(Json(MessageResponse {
        message: "Password reset email sent",
    }))
}

/// The authenticated user
pub async fn me(CurrentSession(session): CurrentSession) -> Json<User> {
    Json(session.user)
}
