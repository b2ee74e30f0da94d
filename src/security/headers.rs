//! Security response headers and CORS.
//!
//! # Responsibilities
//! - Add hardening response headers
//! - Build the permissive CORS layer
//!
//! # Design Decisions
//! - Headers use `if_not_present` so an upstream-set value wins
//! - Both layers are built unconditionally; config decides whether they
//!   are mounted

use axum::http::{header, HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

static X_DNS_PREFETCH_CONTROL: HeaderName = HeaderName::from_static("x-dns-prefetch-control");
static X_DOWNLOAD_OPTIONS: HeaderName = HeaderName::from_static("x-download-options");
static X_PERMITTED_CROSS_DOMAIN_POLICIES: HeaderName =
    HeaderName::from_static("x-permitted-cross-domain-policies");

/// The standard hardening header set.
pub fn security_header_layers() -> Vec<SetResponseHeaderLayer<HeaderValue>> {
    [
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
        (header::REFERRER_POLICY, "no-referrer"),
        (header::X_XSS_PROTECTION, "0"),
        (X_DNS_PREFETCH_CONTROL.clone(), "off"),
        (X_DOWNLOAD_OPTIONS.clone(), "noopen"),
        (X_PERMITTED_CROSS_DOMAIN_POLICIES.clone(), "none"),
    ]
    .into_iter()
    .map(|(name, value)| {
        SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
    })
    .collect()
}

/// Permissive CORS for browser clients.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_set_is_complete() {
        let layers = security_header_layers();
        assert_eq!(layers.len(), 7);
    }
}
