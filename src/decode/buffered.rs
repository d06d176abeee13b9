//! Read-everything-then-parse decoding.

use axum::extract::Request;
use serde::de::DeserializeOwned;

use super::{BodyDecoder, DecodeError, DEFAULT_BODY_LIMIT};

/// Collects the full body into memory, then parses it as JSON.
///
/// A read failure is reported before any parsing is attempted.
#[derive(Debug, Clone, Copy)]
pub struct Buffered {
    limit: usize,
}

impl Buffered {
    /// Create a decoder that refuses bodies larger than `limit` bytes.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for Buffered {
    fn default() -> Self {
        Self::new(DEFAULT_BODY_LIMIT)
    }
}

impl BodyDecoder for Buffered {
    fn name(&self) -> &'static str {
        "buffered"
    }

    async fn decode<T>(&self, request: Request) -> Result<T, DecodeError>
    where
        T: DeserializeOwned + Default + Send + 'static,
    {
        let bytes = axum::body::to_bytes(request.into_body(), self.limit)
            .await
            .map_err(DecodeError::Read)?;

        let value: Option<T> = serde_json::from_slice(&bytes)?;
        Ok(value.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pets::Cat;
    use axum::body::Body;

    fn request(body: impl Into<Body>) -> Request {
        Request::builder().method("POST").uri("/cats/").body(body.into()).unwrap()
    }

    #[tokio::test]
    async fn decodes_json_object() {
        let cat: Cat = Buffered::default()
            .decode(request(r#"{"name":"Tom","type":"tabby"}"#))
            .await
            .unwrap();
        assert_eq!(cat.name, "Tom");
        assert_eq!(cat.kind, "tabby");
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let err = Buffered::default()
            .decode::<Cat>(request(r#"{"name":"Tom""#))
            .await
            .unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn empty_body_is_a_parse_error() {
        let err = Buffered::default().decode::<Cat>(request(Body::empty())).await.unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn null_body_and_fields_read_as_empty() {
        let cat: Cat = Buffered::default().decode(request("null")).await.unwrap();
        assert_eq!(cat, Cat::default());

        let cat: Cat = Buffered::default()
            .decode(request(r#"{"name":null,"type":"tabby"}"#))
            .await
            .unwrap();
        assert_eq!(cat.name, "");
        assert_eq!(cat.kind, "tabby");
    }

    #[tokio::test]
    async fn oversized_body_fails_before_parsing() {
        let err = Buffered::new(8)
            .decode::<Cat>(request(r#"{"name":"Tom","type":"tabby"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, DecodeError::Read(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn trailing_data_is_rejected() {
        let err = Buffered::default()
            .decode::<Cat>(request(r#"{"name":"Tom"} {"name":"Jerry"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)), "got {err:?}");
    }
}
