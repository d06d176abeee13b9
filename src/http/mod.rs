//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, graceful shutdown)
//!     → TraceLayer (per-request span)
//!     → middleware/ (ServerHeader, then group chains)
//!     → handlers.rs (or admin::handlers)
//!     → response.rs (error bodies)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer, ServerError};
