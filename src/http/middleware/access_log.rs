//! Access logging for the admin group.
//!
//! # Responsibilities
//! - Start a timer before the rest of the chain runs
//! - After it completes, record time, status, method, host + path and latency
//!
//! # Design Decisions
//! - Line format: `[<rfc3339>] <status> <METHOD> <host><path> <latency>`
//! - Emitted through `tracing` on the `bluebot::access` target so the
//!   subscriber decides where it goes
//! - Latency uses `Duration`'s debug form (`1.203ms`, `850.1µs`)

use std::fmt;
use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

use super::Interceptor;

/// One completed request, as written to the access log.
#[derive(Debug, Clone)]
pub struct AccessEntry {
    pub time: DateTime<FixedOffset>,
    pub status: StatusCode,
    pub method: Method,
    pub host: String,
    pub path: String,
    pub latency: Duration,
}

impl fmt::Display for AccessEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}{} {:?}",
            self.time.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.status.as_u16(),
            self.method,
            self.host,
            self.path,
            self.latency,
        )
    }
}

/// Times the wrapped chain and logs an [`AccessEntry`] once it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessLog;

impl Interceptor for AccessLog {
    async fn handle(&self, request: Request, next: Next) -> Response {
        let start = Instant::now();
        let method = request.method().clone();
        let host = request_host(&request);
        let path = request.uri().path().to_owned();

        let response = next.run(request).await;

        let entry = AccessEntry {
            time: Local::now().fixed_offset(),
            status: response.status(),
            method,
            host,
            path,
            latency: start.elapsed(),
        };
        tracing::info!(
            target: "bluebot::access",
            status = entry.status.as_u16(),
            latency_us = entry.latency.as_micros() as u64,
            "{entry}"
        );

        response
    }
}

/// The `Host` header, or the URI authority for requests that carry no header.
fn request_host(request: &Request) -> String {
    request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| request.uri().authority().map(|a| a.to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::middleware::Chain;
    use axum::{body::Body, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn entry_format() {
        let entry = AccessEntry {
            time: DateTime::parse_from_rfc3339("2026-10-19T14:03:07+02:00").unwrap(),
            status: StatusCode::UNAUTHORIZED,
            method: Method::GET,
            host: "localhost:3000".into(),
            path: "/admin/main".into(),
            latency: Duration::from_micros(1203),
        };
        assert_eq!(
            entry.to_string(),
            "[2026-10-19T14:03:07+02:00] 401 GET localhost:3000/admin/main 1.203ms"
        );
    }

    #[test]
    fn utc_times_use_z_suffix() {
        let entry = AccessEntry {
            time: DateTime::parse_from_rfc3339("2026-10-19T12:03:07Z").unwrap(),
            status: StatusCode::OK,
            method: Method::GET,
            host: String::new(),
            path: "/".into(),
            latency: Duration::from_nanos(850_100),
        };
        assert_eq!(entry.to_string(), "[2026-10-19T12:03:07Z] 200 GET / 850.1µs");
    }

    #[test]
    fn host_prefers_header_then_authority() {
        let with_header = Request::builder()
            .uri("http://ignored.example/x")
            .header(header::HOST, "bluebot.local")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_host(&with_header), "bluebot.local");

        let authority_only = Request::builder()
            .uri("http://bluebot.example:3000/x")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_host(&authority_only), "bluebot.example:3000");

        let neither = Request::builder().uri("/x").body(Body::empty()).unwrap();
        assert_eq!(request_host(&neither), "");
    }

    #[tokio::test]
    async fn passes_response_through() {
        let router: Router = Router::new().route("/", get(|| async { "logged" }));
        let response = Chain::new()
            .then(AccessLog)
            .wrap(router)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"logged");
    }
}
