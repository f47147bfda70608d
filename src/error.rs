//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::{AuthError, StoreError};
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Auth(AuthError::Store(err))
    }
}

/// JSON error body returned for every failure
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Pricing(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth(err) => match err {
                AuthError::InvalidCredentials
                | AuthError::MissingToken
                | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::EmailInUse => StatusCode::CONFLICT,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::Pricing(err) => match err {
                PricingError::MissingField(_) => "missing_field",
                PricingError::InvalidTimeRange => "invalid_time_range",
                PricingError::InvalidDiscountCode(_) => "invalid_discount_code",
                PricingError::MissingDiscountCode => "missing_discount_code",
                PricingError::UnknownLocation(_) => "unknown_location",
                PricingError::UnknownVehicleType(_) => "unknown_vehicle_type",
            },
            AppError::Auth(err) => match err {
                AuthError::InvalidCredentials => "invalid_credentials",
                AuthError::MissingToken => "missing_token",
                AuthError::InvalidToken => "invalid_token",
                AuthError::EmailInUse => "email_in_use",
                AuthError::UserNotFound => "user_not_found",
                AuthError::Store(_) => "internal",
            },
            AppError::Internal(_) => "internal",
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Pricing(PricingError::MissingField(field)) => {
                Some(serde_json::json!({ "field": field }))
            }
            AppError::Pricing(PricingError::InvalidDiscountCode(code)) => {
                Some(serde_json::json!({ "code": code }))
            }
            AppError::Pricing(PricingError::UnknownLocation(id)) => {
                Some(serde_json::json!({ "location_id": id }))
            }
            AppError::Pricing(PricingError::UnknownVehicleType(id)) => {
                Some(serde_json::json!({ "vehicle_type_id": id }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures get logged and a generic message; user-input
        // errors carry their own message through to the client.
        let message = match &self {
            AppError::Auth(AuthError::Store(err)) => {
                tracing::error!("Session store error: {}", err);
                "Internal error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error_type: self.error_type().to_string(),
            message,
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
