//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; request IDs flow through all log lines
//! - Every contained downstream failure is logged with its service name

pub mod logging;

pub use logging::init_logging;
