//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses and header names/values are legal
//! - Check admin settings are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("headers.{field} is not a valid header {kind}")]
    Header { field: &'static str, kind: &'static str },

    #[error("admin.{0} must not be empty")]
    EmptyAdminField(&'static str),

    #[error("limits.max_body_bytes must be > 0")]
    ZeroBodyLimit,
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let headers = &config.headers;
    if HeaderName::try_from(headers.marker_name.as_str()).is_err() {
        errors.push(ValidationError::Header { field: "marker_name", kind: "name" });
    }
    for (field, value) in [("server", &headers.server), ("marker_value", &headers.marker_value)] {
        if value.is_empty() || HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::Header { field, kind: "value" });
        }
    }

    if config.admin.username.is_empty() {
        errors.push(ValidationError::EmptyAdminField("username"));
    }
    if config.admin.realm.is_empty() {
        errors.push(ValidationError::EmptyAdminField("realm"));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
