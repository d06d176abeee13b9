//! Content-Type driven binding through axum's extractors.
//!
//! # Responsibilities
//! - Pick a decoder from the request's Content-Type
//! - Fall back to the query string for bodiless GET/DELETE requests
//! - Reject media types nothing knows how to read
//!
//! # Design Decisions
//! - JSON, form and query decoding all go through axum (`Json`, `Form`,
//!   `Query`), so the accepted shapes match the framework's own extractors
//! - The Content-Type parameters (`; charset=...`) are ignored
//! - XML and `multipart/form-data` bodies are not bound; they report
//!   [`DecodeError::UnsupportedMediaType`] like any other unknown type

use axum::{
    body::Body,
    extract::{FromRequest, Query, Request},
    http::{header, Method},
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::{BodyDecoder, DecodeError, DEFAULT_BODY_LIMIT};

const MIME_JSON: &str = "application/json";
const MIME_FORM: &str = "application/x-www-form-urlencoded";

/// Binds the request onto a record using whichever source its headers name.
#[derive(Debug, Clone, Copy)]
pub struct Bind {
    limit: usize,
}

impl Bind {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for Bind {
    fn default() -> Self {
        Self::new(DEFAULT_BODY_LIMIT)
    }
}

impl BodyDecoder for Bind {
    fn name(&self) -> &'static str {
        "bind"
    }

    async fn decode<T>(&self, request: Request) -> Result<T, DecodeError>
    where
        T: DeserializeOwned + Default + Send + 'static,
    {
        let (parts, body) = request.into_parts();
        let bytes = axum::body::to_bytes(body, self.limit)
            .await
            .map_err(DecodeError::Read)?;

        if bytes.is_empty() {
            if parts.method == Method::GET || parts.method == Method::DELETE {
                let Query(value) = Query::<T>::try_from_uri(&parts.uri)
                    .map_err(|rejection| DecodeError::Rejected(rejection.body_text()))?;
                return Ok(value);
            }
            return Err(DecodeError::EmptyBody);
        }

        let media_type = parts
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match media_type.as_str() {
            MIME_JSON => {
                let Json(value) = Json::<Option<T>>::from_bytes(&bytes)
                    .map_err(|rejection| DecodeError::Rejected(rejection.body_text()))?;
                Ok(value.unwrap_or_default())
            }
            MIME_FORM => {
                let request = Request::from_parts(parts, Body::from(bytes));
                let Form(value) = Form::<T>::from_request(request, &())
                    .await
                    .map_err(|rejection| DecodeError::Rejected(rejection.body_text()))?;
                Ok(value)
            }
            other => Err(DecodeError::UnsupportedMediaType(other.to_owned())),
        }
    }
}
