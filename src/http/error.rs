//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::upstream::UpstreamError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Raw upstream payload, attached only for upstream-reported failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: None,
        }
    }

    pub fn with_raw(mut self, raw: Value) -> Self {
        self.raw = Some(raw);
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid request input
    BadRequest(String),
    /// Empty upstream result set
    NotFound(String),
    /// Upstream service reported a failure; carries its raw payload
    BadGateway { message: String, raw: Value },
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg)),
            AppError::BadGateway { message, raw } => (
                StatusCode::BAD_GATEWAY,
                ErrorBody::new(message).with_raw(raw),
            ),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Rejected { raw } => AppError::BadGateway {
                message: "Failed to fetch prayer times".to_string(),
                raw,
            },
            // Transport and decode failures are not shaped for clients.
            other => AppError::Internal(other.to_string()),
        }
    }
}
