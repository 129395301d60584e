//! JSON envelopes shared by all handlers
//!
//! Success bodies wrap their payload in `{success, data, count?, message?,
//! timestamp}`; failures become `{error, message, statusCode, timestamp}`.
//! `ApiError` is the only place core errors meet HTTP status codes.

use crate::types::{ErrorKind, LedgerError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

/// Standard success envelope
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a payload
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// Wrap a collection payload with its element count
    pub fn with_count(data: T, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::new(data)
        }
    }

    /// Wrap a payload with a human-readable note
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(data)
        }
    }
}

/// An error response ready for transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            message: message.into(),
        }
    }

    /// 401 for a missing credential
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", message)
    }

    /// 403 for a rejected credential
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden", message)
    }

    /// 404 for an unmatched route
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", message)
    }
}

impl From<LedgerError> for ApiError {
    /// Translate a core failure into a status code and envelope fields
    fn from(error: LedgerError) -> Self {
        let (status, label) = match error.kind() {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "Bad Request"),
            ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        Self::new(status, label, error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.error,
            "message": self.message,
            "statusCode": self.status.as_u16(),
            "timestamp": Utc::now(),
        });
        (self.status, Json(body)).into_response()
    }
}
