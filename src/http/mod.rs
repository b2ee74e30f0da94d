//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table → handlers)
//!     → request.rs (add request ID)
//!     → [aggregator invokes the route's service calls]
//!     → response.rs (status mapping for orchestration failures)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{set_request_id_layer, UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
