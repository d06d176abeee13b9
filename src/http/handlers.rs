//! Public route handlers.

use std::fmt::Debug;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::decode::{Bind, BodyDecoder, Buffered, Streaming};
use crate::http::response::{status_error, ErrorDetail};
use crate::http::server::AppState;
use crate::pets::{Cat, Dog, Hamster};

pub const GREETING: &str = "hello from the web side";
pub const DATATYPE_ERROR: &str = "you need to let us know if you want json or string datatype";

/// `GET /`
pub async fn hello() -> &'static str {
    GREETING
}

/// `GET /cats/{data}?name=&type=`
///
/// `data` picks the response format: `string` or `json`. Missing query
/// parameters read as empty strings; a repeated key yields its first value.
pub async fn get_cats(
    Path(data): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let name = first_param(&params, "name");
    let kind = first_param(&params, "type");

    match data.as_str() {
        "string" => format!("your cat name is {name}\nand his type is {kind}\n").into_response(),
        "json" => Json(Cat { name, kind }).into_response(),
        _ => (StatusCode::BAD_REQUEST, Json(ErrorDetail::new(DATATYPE_ERROR))).into_response(),
    }
}

/// `POST /cats/` — whole body read first, then parsed.
pub async fn add_cat(State(state): State<AppState>, request: Request) -> Response {
    match decode_pet::<Cat, _>(Buffered::new(state.body_limit), request, "cat").await {
        Some(_) => "we got your cat".into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "").into_response(),
    }
}

/// `POST /dogs/` — parsed straight off the body stream.
pub async fn add_dog(request: Request) -> Response {
    match decode_pet::<Dog, _>(Streaming, request, "dog").await {
        Some(_) => "we got your dog".into_response(),
        None => status_error(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// `POST /hamsters/` — bound according to the Content-Type.
pub async fn add_hamster(State(state): State<AppState>, request: Request) -> Response {
    match decode_pet::<Hamster, _>(Bind::new(state.body_limit), request, "hamster").await {
        Some(_) => "we got your hamster".into_response(),
        None => status_error(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Fallback for unmatched paths.
pub async fn not_found() -> Response {
    status_error(StatusCode::NOT_FOUND)
}

fn first_param(params: &[(String, String)], key: &str) -> String {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

/// Decode and log a pet record. Failures are logged and collapse to `None`.
async fn decode_pet<T, D>(decoder: D, request: Request, pet: &'static str) -> Option<T>
where
    T: DeserializeOwned + Default + Debug + Send + 'static,
    D: BodyDecoder,
{
    match decoder.decode::<T>(request).await {
        Ok(record) => {
            tracing::info!(pet, decoder = decoder.name(), record = ?record, "pet received");
            Some(record)
        }
        Err(e) => {
            tracing::error!(pet, decoder = decoder.name(), error = %e, "Failed decoding request body");
            None
        }
    }
}
