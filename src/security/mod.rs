//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (hardening response headers, when enabled)
//!     → CORS headers (when enabled)
//! ```
//!
//! # Design Decisions
//! - Both concerns are explicit startup options, not ambient globals

pub mod headers;

pub use headers::{cors_layer, security_header_layers};
