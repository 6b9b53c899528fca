//! Error handling for the EcoClime server
//!
//! Every failure is reported to the caller as a single human-readable
//! message with a stable error code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    // Upstream errors
    #[error("Location not found: {0}")]
    PlaceNotFound(String),

    #[error("{service} returned {status}")]
    UpstreamStatus { service: &'static str, status: u16 },

    #[error("{0} request timed out")]
    UpstreamTimeout(&'static str),

    #[error("{service} sent an unexpected response: {detail}")]
    MalformedResponse {
        service: &'static str,
        detail: String,
    },

    #[error("{service} request failed: {detail}")]
    UpstreamUnavailable {
        service: &'static str,
        detail: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Classify a reqwest failure for the named upstream
    pub fn from_reqwest(service: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout(service)
        } else if err.is_decode() {
            AppError::MalformedResponse {
                service,
                detail: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            AppError::UpstreamStatus {
                service,
                status: status.as_u16(),
            }
        } else {
            AppError::UpstreamUnavailable {
                service,
                detail: err.to_string(),
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let first = errors
            .field_errors()
            .into_iter()
            .min_by_key(|(field, _)| *field)
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                (field.to_string(), message)
            });

        match first {
            Some((field, message)) => AppError::Validation { field, message },
            None => AppError::validation("request", "Invalid request"),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::PlaceNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "PLACE_NOT_FOUND".to_string(),
                    message: "Location not found".to_string(),
                    field: None,
                },
            ),
            AppError::UpstreamStatus { service, .. } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_STATUS".to_string(),
                    message: format!("{} data not available", service),
                    field: None,
                },
            ),
            AppError::UpstreamTimeout(service) => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorDetail {
                    code: "UPSTREAM_TIMEOUT".to_string(),
                    message: format!("{} did not respond in time", service),
                    field: None,
                },
            ),
            AppError::MalformedResponse { service, .. } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MALFORMED_RESPONSE".to_string(),
                    message: format!("{} sent an unexpected response", service),
                    field: None,
                },
            ),
            AppError::UpstreamUnavailable { service, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "UPSTREAM_UNAVAILABLE".to_string(),
                    message: format!("{} is temporarily unavailable", service),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
