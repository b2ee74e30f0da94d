//! Response shaping.
//!
//! # Responsibilities
//! - Map orchestration failures to wire responses
//!
//! # Design Decisions
//! - Downstream failures never reach here; they are merged as data under
//!   their service key by the aggregator
//! - Handler-level failures use the same `{"error": msg}` shape as a
//!   contained downstream failure, but with status 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::aggregator::AggregateError;

impl IntoResponse for AggregateError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
