//! BlueBot demo server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TraceLayer ─▶ ServerHeader ─┬─▶ /            hello
//!                                                 ├─▶ /cats/{data} get_cats
//!                                                 ├─▶ /cats/       add_cat      (Buffered)
//!                                                 ├─▶ /dogs/       add_dog      (Streaming)
//!                                                 ├─▶ /hamsters/   add_hamster  (Bind)
//!                                                 └─▶ /admin/*  ─▶ AccessLog ─▶ BasicAuth ─▶ main_page
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use bluebot::config::load_or_default;
use bluebot::lifecycle::{wait_for_signal, Shutdown};
use bluebot::observability::init_logging;
use bluebot::HttpServer;

#[derive(Parser)]
#[command(name = "bluebot", version, about = "BlueBot demo HTTP server")]
struct Args {
    /// TOML config file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    println!("Welcome to the server");
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        config_file = ?args.config,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
