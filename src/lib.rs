//! JSON aggregation gateway.
//!
//! Route handlers compose one or more downstream service calls into a
//! single keyed JSON response, containing per-call failures as data so a
//! partial downstream failure does not abort the request.

pub mod aggregator;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod services;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
