//! Stamps identification headers on every response.

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use super::Interceptor;
use crate::config::HeaderConfig;

/// Sets `Server` and a marker header on whatever the inner chain returns,
/// error and fallback responses included.
#[derive(Debug, Clone)]
pub struct ServerHeader {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl ServerHeader {
    pub fn new(server: HeaderValue) -> Self {
        Self {
            headers: vec![(header::SERVER, server)],
        }
    }

    /// Add another header to stamp.
    pub fn with(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn from_config(config: &HeaderConfig) -> Result<Self, axum::http::Error> {
        let server = HeaderValue::from_str(&config.server)?;
        let marker_name = HeaderName::try_from(config.marker_name.as_str())?;
        let marker_value = HeaderValue::from_str(&config.marker_value)?;
        Ok(Self::new(server).with(marker_name, marker_value))
    }
}

impl Interceptor for ServerHeader {
    async fn handle(&self, request: Request, next: Next) -> Response {
        let mut response = next.run(request).await;
        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        response
    }
}
