//! Downstream service calls.
//!
//! # Data Flow
//! ```text
//! ServiceConfig[] (from config)
//!     → catalog.rs (build one HttpServiceCall per entry, shared client)
//!     → resolve(route.services) at router build time
//!     → call(ctx) per request:
//!         http_call.rs builds the target URL, performs the GET,
//!         decodes JSON, contains any failure as ServiceResult::Err
//! ```
//!
//! # Design Decisions
//! - A call's public contract is exception-free: every failure path
//!   resolves to a value the aggregator can merge
//! - No retries and no per-call timeout; transport defaults only
//! - Downstream HTTP status is not inspected; the body is decoded as-is

pub mod catalog;
pub mod http_call;

pub use catalog::{BuildError, ServiceCatalog};
pub use http_call::HttpServiceCall;

use async_trait::async_trait;

use crate::aggregator::{RequestContext, ServiceResult};

/// One downstream fetch with a normalized, exception-free result.
#[async_trait]
pub trait ServiceCall: Send + Sync + std::fmt::Debug {
    /// Stable name; becomes this call's key in the aggregated response.
    fn name(&self) -> &str;

    /// Perform the downstream fetch. Never fails past this boundary;
    /// failures come back as `ServiceResult::Err`.
    async fn call(&self, ctx: &RequestContext) -> ServiceResult;
}
