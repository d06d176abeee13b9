//! Response bodies shared across handlers and interceptors.
//!
//! # Responsibilities
//! - Generic `{"message": "..."}` error object for 4xx/5xx replies
//! - The `{"error": "..."}` object used by the cats endpoint
//!
//! # Design Decisions
//! - Error bodies never carry internal detail; that goes to the log
//! - Message text is the status code's canonical reason phrase

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Opaque error object: `{"message": "Internal Server Error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message built from the status code's reason phrase.
    pub fn for_status(status: StatusCode) -> Self {
        Self::new(status.canonical_reason().unwrap_or("Unknown Status"))
    }
}

/// Respond with `status` and its generic JSON error object.
pub fn status_error(status: StatusCode) -> Response {
    (status, Json(ErrorMessage::for_status(status))).into_response()
}

/// Client-facing explanation: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub error: String,
}

impl ErrorDetail {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
