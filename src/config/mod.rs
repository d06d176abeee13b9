//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! --config <file> (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → consumed once while building the route table
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults, so no file is needed at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::AdminConfig;
pub use schema::HeaderConfig;
pub use schema::ListenerConfig;
pub use schema::ServerConfig;
