//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

const JSONPLACEHOLDER: &str = "https://jsonplaceholder.typicode.com";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Downstream service call definitions.
    pub services: Vec<ServiceConfig>,

    /// Routes mapping inbound GET paths to services.
    pub routes: Vec<RouteConfig>,

    /// Security middleware toggles.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            services: default_services(),
            routes: default_routes(),
            security: SecurityConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Service and route tables of the legacy deployment. The two entries
/// with an empty `base_url` carry its relative-path defect verbatim; they
/// fail at call time unless a base URL is configured.
fn default_services() -> Vec<ServiceConfig> {
    vec![
        ServiceConfig::remote("getTodosService", JSONPLACEHOLDER, "/todos"),
        ServiceConfig::remote("getTodoService", JSONPLACEHOLDER, "/todos/{id}"),
        ServiceConfig::remote("getPostsService", JSONPLACEHOLDER, "/posts"),
        ServiceConfig::remote("getPostService", JSONPLACEHOLDER, "/posts/{id}"),
        ServiceConfig::local("HealthCheckService", "/health"),
        ServiceConfig::local("TodosService", "/todos/:id"),
    ]
}

fn default_routes() -> Vec<RouteConfig> {
    [
        ("/todo/todos", "getTodosService"),
        ("/todo/{id}", "getTodoService"),
        ("/post/posts", "getPostsService"),
        ("/post/{id}", "getPostService"),
        ("/health-check-controller", "HealthCheckService"),
        ("/todos-controller", "TodosService"),
    ]
    .into_iter()
    .map(|(path, service)| RouteConfig {
        path: path.to_string(),
        services: vec![service.to_string()],
    })
    .collect()
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

impl ListenerConfig {
    /// Replace the port portion of the bind address.
    pub fn set_port(&mut self, port: u16) {
        match self.bind_address.parse::<SocketAddr>() {
            Ok(mut addr) => {
                addr.set_port(port);
                self.bind_address = addr.to_string();
            }
            Err(_) => self.bind_address = format!("0.0.0.0:{port}"),
        }
    }
}

/// One downstream call definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name; doubles as its key in aggregated responses.
    pub name: String,

    /// Prefix for the downstream target. Empty keeps legacy relative paths.
    #[serde(default)]
    pub base_url: String,

    /// Path template; `{name}` segments are filled from request params.
    pub path: String,

    /// How a non-empty query string is joined to the URL.
    #[serde(default)]
    pub query_separator: QuerySeparator,

    /// Forward the inbound query string to the downstream call.
    #[serde(default = "default_true")]
    pub forward_query: bool,

    /// Attach the inbound body as JSON (legacy GET-with-body behavior).
    #[serde(default = "default_true")]
    pub attach_body: bool,
}

impl ServiceConfig {
    /// Entry proxying an external REST API.
    pub fn remote(name: &str, base_url: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            path: path.to_string(),
            query_separator: QuerySeparator::default(),
            forward_query: true,
            attach_body: true,
        }
    }

    /// Legacy local entry: bare path, no query or body forwarding.
    pub fn local(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: String::new(),
            path: path.to_string(),
            query_separator: QuerySeparator::default(),
            forward_query: false,
            attach_body: false,
        }
    }
}

/// Join policy between URL and query string.
///
/// `Bare` reproduces the legacy `url + query` concatenation with no `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuerySeparator {
    #[default]
    Bare,
    Delimited,
}

fn default_true() -> bool {
    true
}

/// Route mapping an inbound GET path to a list of services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Inbound path, axum syntax (e.g. "/post/{id}").
    pub path: String,

    /// Names of the services invoked for this route, in invocation order.
    pub services: Vec<String>,
}

/// Security middleware toggles.
///
/// Historically always-on; here both are explicit startup options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add security response headers.
    pub enable_security_headers: bool,

    /// Allow cross-origin requests (permissive CORS).
    pub enable_cors: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_security_headers: true,
            enable_cors: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
