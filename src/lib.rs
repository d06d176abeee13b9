//! BlueBot demo HTTP server library.

pub mod admin;
pub mod client;
pub mod config;
pub mod decode;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pets;
pub mod routing;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
