//! Incremental decoding straight off the body stream.
//!
//! The async body is bridged into a blocking [`std::io::Read`] and handed to
//! serde_json on the blocking pool, so the parser pulls frames as it needs them
//! instead of waiting for the whole body.

use axum::extract::Request;
use futures_util::TryStreamExt;
use serde::de::DeserializeOwned;
use tokio_util::io::{StreamReader, SyncIoBridge};

use super::{BodyDecoder, DecodeError};

/// Parses the first JSON value from the body stream. Anything after that
/// value is left unread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Streaming;

impl BodyDecoder for Streaming {
    fn name(&self) -> &'static str {
        "streaming"
    }

    async fn decode<T>(&self, request: Request) -> Result<T, DecodeError>
    where
        T: DeserializeOwned + Default + Send + 'static,
    {
        let stream = request
            .into_body()
            .into_data_stream()
            .map_err(std::io::Error::other);
        let reader = SyncIoBridge::new(StreamReader::new(stream));

        tokio::task::spawn_blocking(move || -> Result<T, DecodeError> {
            let mut values = serde_json::Deserializer::from_reader(reader).into_iter::<Option<T>>();
            match values.next() {
                Some(value) => Ok(value?.unwrap_or_default()),
                None => Err(DecodeError::EmptyBody),
            }
        })
        .await?
    }
}
