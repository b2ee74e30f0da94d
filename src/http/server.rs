//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the axum Router from the configured route table
//! - Wire up middleware (tracing, request ID, security headers, CORS)
//! - Extract the request context and dispatch to the aggregator
//! - Serve with graceful shutdown

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, RawPathParams};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::aggregator::{aggregate, RequestContext};
use crate::config::GatewayConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::security::headers::{cors_layer, security_header_layers};
use crate::services::{BuildError, ServiceCall, ServiceCatalog};

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, BuildError> {
        let catalog = ServiceCatalog::from_config(&config.services)?;
        let router = Self::build_router(&config, &catalog)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router: one generic aggregator handler per configured
    /// route, plus the middleware stack.
    fn build_router(config: &GatewayConfig, catalog: &ServiceCatalog) -> Result<Router, BuildError> {
        let mut router = Router::new();

        for route in &config.routes {
            let calls: Arc<[Arc<dyn ServiceCall>]> = catalog.resolve(&route.services)?.into();
            router = router.route(
                &route.path,
                get(
                    move |params: RawPathParams,
                          query: Query<HashMap<String, String>>,
                          body: Bytes| {
                        let calls = Arc::clone(&calls);
                        async move { dispatch(&calls, params, query, body).await }
                    },
                ),
            );
        }

        let mut router = router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(set_request_id_layer())
                .layer(propagate_request_id_layer()),
        );

        if config.security.enable_security_headers {
            for layer in security_header_layers() {
                router = router.layer(layer);
            }
        }
        if config.security.enable_cors {
            router = router.layer(cors_layer());
        }

        Ok(router)
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.config.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Generic route handler: extract the request context, aggregate the route's
/// calls, respond 200 with the merged object or 500 on orchestration failure.
async fn dispatch(
    calls: &[Arc<dyn ServiceCall>],
    params: RawPathParams,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let ctx = RequestContext::new(
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        parse_body(&body),
        query,
    );

    match aggregate(calls, &ctx).await {
        Ok(merged) => (StatusCode::OK, Json(merged)).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "Aggregation failed");
            error.into_response()
        }
    }
}

/// The legacy gateway never parsed request bodies, so an absent or
/// undecodable body degrades to `null` rather than a 400.
fn parse_body(bytes: &Bytes) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}
