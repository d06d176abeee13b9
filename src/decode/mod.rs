//! Request body decoding subsystem.
//!
//! # Data Flow
//! ```text
//! Request<Body>
//!     → buffered.rs  (collect whole body → serde_json::from_slice)
//!     → streaming.rs (body stream → blocking reader → first JSON value)
//!     → bind.rs      (Content-Type negotiation → JSON / form / query)
//!     → Ok(record) or DecodeError
//! ```
//!
//! # Design Decisions
//! - Every strategy takes the request by value, so the body is always
//!   consumed or dropped when decoding returns, on success and on error
//! - Strategies are interchangeable behind [`BodyDecoder`]
//! - A JSON `null` body decodes to the record's `Default`
//! - Errors carry detail for logging only; handlers never echo them

pub mod bind;
pub mod buffered;
pub mod streaming;

use std::future::Future;

use axum::extract::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use bind::Bind;
pub use buffered::Buffered;
pub use streaming::Streaming;

/// Default cap on the number of body bytes a decoder will collect.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Errors produced while turning a request body into a record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body stream failed or exceeded the size limit.
    #[error("failed reading the request body: {0}")]
    Read(#[source] axum::Error),

    /// The bytes were read but are not a valid record.
    #[error("failed parsing the request body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Nothing to decode.
    #[error("request body can't be empty")]
    EmptyBody,

    /// The Content-Type has no decoder.
    #[error("unsupported media type: {0:?}")]
    UnsupportedMediaType(String),

    /// An axum extractor refused the input.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The blocking parse task panicked or was cancelled.
    #[error("decode task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A strategy for decoding a request body into a typed record.
pub trait BodyDecoder: Send + Sync {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    /// Consume `request` and decode its body into `T`.
    fn decode<T>(&self, request: Request) -> impl Future<Output = Result<T, DecodeError>> + Send
    where
        T: DeserializeOwned + Default + Send + 'static;
}
