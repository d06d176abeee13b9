//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Hold the per-process state handed to handlers
//! - Build the route table once from the loaded config
//! - Serve it on a bound listener until shutdown is signalled

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::routing;

/// Application state injected into handlers. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Largest request body the decoders will collect.
    pub body_limit: usize,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            body_limit: config.limits.max_body_bytes,
        }
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The config produced an unusable header or challenge.
    #[error("invalid route table: {0}")]
    Routes(#[from] axum::http::Error),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for the demo routes.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let router = routing::build(&config)?;
        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener until a
    /// message arrives on `shutdown` (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled route table, for driving it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
