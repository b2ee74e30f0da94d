//! Response aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (params, query, body)
//!     → RequestContext (immutable, request-scoped)
//!     → aggregate(): invoke each configured service call in turn
//!     → AggregatedResponse (service name → ServiceResult)
//!     → 200 with the merged object
//!
//! Failure tiers:
//!     Downstream failure → contained inside the service call,
//!         merged as {"error": msg} under the call's key (still 200)
//!     Orchestration failure → AggregateError → 500 {"error": msg}
//! ```
//!
//! # Design Decisions
//! - Failures from downstream calls are data, not control flow
//! - One response key per invoked call; duplicates are a wiring bug
//! - Calls run sequentially; the merge is order-independent
//! - This module is transport-free; extraction lives in `http`

pub mod handler;
pub mod types;

pub use handler::{aggregate, AggregateError};
pub use types::{AggregatedResponse, RequestContext, ServiceResult};
