//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → bluebot::access lines from the admin AccessLog
//!     → tower_http TraceLayer request spans
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, text or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing when `json_logs` is set
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;
