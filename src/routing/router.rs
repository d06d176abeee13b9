//! Route table construction.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::admin::setup_admin_router;
use crate::config::ServerConfig;
use crate::http::handlers;
use crate::http::middleware::{Chain, ServerHeader};
use crate::http::server::AppState;

/// Build the full route table with every interceptor attached.
pub fn build(config: &ServerConfig) -> Result<Router, axum::http::Error> {
    let routes = Router::<AppState>::new()
        .route("/", get(handlers::hello))
        .route("/cats/{data}", get(handlers::get_cats))
        .route("/cats/", post(handlers::add_cat))
        .route("/dogs/", post(handlers::add_dog))
        .route("/hamsters/", post(handlers::add_hamster))
        .nest("/admin", setup_admin_router(&config.admin)?)
        .fallback(handlers::not_found);

    let routes = Chain::new()
        .then(ServerHeader::from_config(&config.headers)?)
        .wrap(routes);

    Ok(routes
        .with_state(AppState::from_config(config))
        .layer(TraceLayer::new_for_http()))
}
