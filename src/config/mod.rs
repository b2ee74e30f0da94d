//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → consumed at startup by the catalog and router builders
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults; the empty config is the full legacy deployment
//! - Validation separates syntactic (serde) from semantic checks
//! - Legacy downstream quirks (bare query separator, GET body, relative
//!   paths) are explicit per-service settings, not hardcoded behavior

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    GatewayConfig, ListenerConfig, ObservabilityConfig, QuerySeparator, RouteConfig,
    SecurityConfig, ServiceConfig,
};
pub use validation::{validate_config, ValidationError};
