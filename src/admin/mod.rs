//! Admin route group.
//!
//! # Data Flow
//! ```text
//! /admin/*
//!     → AccessLog (timer starts)
//!     → BasicAuth (401 unless the verifier accepts)
//!     → handlers.rs
//!     → AccessLog (line written)
//! ```

pub mod auth;
pub mod handlers;

use axum::{http::header::InvalidHeaderValue, routing::get, Router};

use crate::config::AdminConfig;
use crate::http::handlers::not_found;
use crate::http::middleware::{AccessLog, Chain};
use self::auth::BasicAuth;
use self::handlers::main_page;

/// Build the router mounted under `/admin`.
///
/// Unknown paths inside the group still pass through the logger and the
/// credential check before answering 404.
pub fn setup_admin_router<S>(config: &AdminConfig) -> Result<Router<S>, InvalidHeaderValue>
where
    S: Clone + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/main", get(main_page))
        .fallback(not_found);

    Ok(Chain::new()
        .then(AccessLog)
        .then(BasicAuth::from_config(config)?)
        .wrap(router))
}
