//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     ServerConfig
//!     → router.rs (register method + pattern → handler)
//!     → nest /admin group with its own chain
//!     → wrap everything in the global chain
//!     → Freeze as immutable Router
//!
//! Incoming Request (method, path)
//!     → static segments first, then {param} segments
//!     → handler, 405 for a known path with another method, or 404 fallback
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Most specific pattern wins: `/cats/` beats `/cats/{data}`
//! - Patterns that could match the same path are rejected at registration,
//!   so ambiguity is a startup failure rather than a runtime choice

pub mod router;

pub use router::build;
